use super::{TOAST_DURATION_MS, Toast, ToastMessage, ToastQueue};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Toast queue shared through Leptos.
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Shows a toast and schedules its dismissal.
    pub fn push(&self, message: ToastMessage) {
        let Some(id) = self.queue.try_update(|queue| queue.push(message)) else {
            return;
        };

        let queue = self.queue;
        Timeout::new(TOAST_DURATION_MS, move || {
            // The provider may be gone by the time the timer fires.
            let _ = queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    /// Visible toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.toasts().to_vec())
    }
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext::new());

    view! { {children()} }
}

/// Returns the toast context or a detached fallback.
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}
