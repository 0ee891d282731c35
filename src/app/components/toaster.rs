use dioxus::prelude::*;

use crate::shared::hooks::{use_toast, Toast};
use crate::shared::utils::sleep;

/// Stack of active notifications, bottom-right
#[component]
pub fn Toaster() -> Element {
    let queue = use_toast();
    let toasts = queue.toasts.read().clone();

    rsx! {
        div { class: "c-toaster", role: "status", aria_live: "polite",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast: toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let queue = use_toast();
    let id = toast.id;

    // Scoped to this card: the timer dies with it on manual dismiss
    use_future(move || async move {
        sleep(queue.duration).await;
        queue.dismiss(id);
    });

    rsx! {
        div { class: "c-toast",
            div { class: "c-toast__body",
                p { class: "c-toast__title", "{toast.title}" }
                if !toast.description.is_empty() {
                    p { class: "c-toast__description", "{toast.description}" }
                }
            }
            button {
                class: "c-toast__close",
                aria_label: "Dismiss notification",
                onclick: move |_| queue.dismiss(id),
                "×"
            }
        }
    }
}
