//! Toast notifications. The queue is plain data so the limit and dismissal
//! rules are testable without a browser; `state` wires it into Leptos.

#[cfg(target_arch = "wasm32")]
pub(crate) mod state;

/// Maximum number of toasts shown at once. Older toasts are evicted.
pub const TOAST_LIMIT: usize = 1;
/// How long a toast stays visible before it is dismissed automatically.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Content of a toast before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: ToastMessage,
}

#[derive(Clone, Debug)]
pub struct ToastQueue {
    next_id: u64,
    limit: usize,
    toasts: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            next_id: 1,
            limit: limit.max(1),
            toasts: Vec::new(),
        }
    }

    /// Queues a toast, evicting the oldest ones beyond the limit, and returns
    /// its id.
    pub fn push(&mut self, message: ToastMessage) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message });
        if self.toasts.len() > self.limit {
            let excess = self.toasts.len() - self.limit;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Removes a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::{TOAST_LIMIT, ToastMessage, ToastQueue, ToastVariant};

    #[test]
    fn destructive_constructor_sets_variant() {
        let message = ToastMessage::destructive("Access Denied", "Try again.");
        assert_eq!(message.variant, ToastVariant::Destructive);
        assert_eq!(ToastMessage::new("a", "b").variant, ToastVariant::Default);
    }

    #[test]
    fn default_queue_keeps_only_the_latest_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastMessage::new("first", ""));
        let second = queue.push(ToastMessage::new("second", ""));

        assert_eq!(TOAST_LIMIT, 1);
        assert!(second > first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
        assert_eq!(queue.toasts()[0].message.title, "second");
    }

    #[test]
    fn larger_limit_evicts_oldest_first() {
        let mut queue = ToastQueue::with_limit(2);
        queue.push(ToastMessage::new("one", ""));
        queue.push(ToastMessage::new("two", ""));
        queue.push(ToastMessage::new("three", ""));

        let titles: Vec<&str> = queue
            .toasts()
            .iter()
            .map(|toast| toast.message.title.as_str())
            .collect();
        assert_eq!(titles, ["two", "three"]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut queue = ToastQueue::with_limit(3);
        let first = queue.push(ToastMessage::new("one", ""));
        let second = queue.push(ToastMessage::new("two", ""));

        queue.dismiss(first);
        queue.dismiss(999);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn zero_limit_is_clamped_to_one() {
        let mut queue = ToastQueue::with_limit(0);
        queue.push(ToastMessage::new("kept", ""));
        assert_eq!(queue.toasts().len(), 1);
    }
}
