// Custom Dioxus hooks
pub mod use_toast;
pub mod use_orbital_timeline;
pub mod use_contact_form;
pub mod use_chatbot;
pub mod use_scroll;

#[cfg(test)]
mod testing;

pub use use_toast::{use_toast, use_toast_provider, Toast, ToastQueue};
pub use use_orbital_timeline::{use_orbital_timeline, OrbitalTimelineState};
pub use use_contact_form::{use_contact_form, ContactFormState};
pub use use_chatbot::{use_chatbot, ChatbotState};
pub use use_scroll::{scroll_to_top, use_scrolled};
