//! Fixed-position stack rendering the toast queue.

use crate::components::{Alert, AlertKind};
use crate::features::notify::{Toast, ToastVariant, state::use_toast};
use leptos::prelude::*;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="fixed top-4 right-4 z-50 flex w-full max-w-sm flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.toasts()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let kind = match toast.message.variant {
                        ToastVariant::Default => AlertKind::Success,
                        ToastVariant::Destructive => AlertKind::Error,
                    };
                    view! {
                        <div class="relative shadow-lg">
                            <Alert
                                kind=kind
                                title=toast.message.title
                                message=toast.message.description
                            />
                            <button
                                type="button"
                                class="absolute top-2 right-2 opacity-70 hover:opacity-100"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <span class="material-symbols-outlined text-sm">"close"</span>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
