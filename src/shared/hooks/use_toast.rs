use std::time::Duration;

use dioxus::prelude::*;

use crate::shared::logging::log_toast;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Notification surface shared through context. Fire-and-forget: `push`
/// returns nothing, the toaster dismisses each toast after `duration`.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    pub duration: Duration,
}

impl ToastQueue {
    pub fn push(&self, title: impl Into<String>, description: impl Into<String>) {
        let mut next_id = self.next_id;
        let mut toasts = self.toasts;
        let id = *next_id.peek();
        next_id.set(id + 1);

        let toast = Toast {
            id,
            title: title.into(),
            description: description.into(),
        };
        log_toast(&toast.title);
        toasts.write().push(toast);
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

/// Create the queue and provide it to every descendant
pub fn use_toast_provider(duration: Duration) -> ToastQueue {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0_u64);
    use_context_provider(|| ToastQueue {
        toasts,
        next_id,
        duration,
    })
}

pub fn use_toast() -> ToastQueue {
    use_context::<ToastQueue>()
}
