use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::domain::models::ChatMessage;
use crate::shared::hooks::use_chatbot;

/// Floating support chat. Lives in the layout so the conversation survives
/// page changes; replies still scheduled stop with it.
#[component]
pub fn Chatbot() -> Element {
    let chat = use_chatbot();
    let is_open = chat.session.read().is_open();

    if !is_open {
        return rsx! {
            button {
                class: "c-chatbot__launcher",
                aria_label: "Open chat",
                onclick: move |_| chat.open(),
                Icon { name: "message-circle" }
            }
        };
    }

    let (messages, draft, can_send, quick_actions) = {
        let session = chat.session.read();
        (
            session.messages().to_vec(),
            session.draft().to_string(),
            session.can_send(),
            session.quick_actions(),
        )
    };

    let pick = EventHandler::new(move |text: &'static str| chat.send(text));

    rsx! {
        div { class: "c-chatbot",
            div { class: "c-chatbot__header",
                div { class: "c-chatbot__identity",
                    span { class: "c-chatbot__avatar", Icon { name: "bot" } }
                    div {
                        h3 { class: "c-chatbot__title", "AI Assistant" }
                        p { class: "c-chatbot__status", "Online" }
                    }
                }
                button {
                    class: "c-button c-button--ghost c-chatbot__close",
                    aria_label: "Close chat",
                    onclick: move |_| chat.close(),
                    Icon { name: "close" }
                }
            }

            div { class: "c-chatbot__messages",
                for message in messages {
                    ChatBubble { key: "{message.id}", message: message }
                }
            }

            if !quick_actions.is_empty() {
                div { class: "c-chatbot__quick",
                    p { class: "c-chatbot__quick-label", "Quick actions:" }
                    for action in quick_actions.iter().copied() {
                        QuickAction { key: "{action}", text: action, onpick: pick }
                    }
                }
            }

            div { class: "c-chatbot__composer",
                input {
                    class: "c-input c-chatbot__input",
                    r#type: "text",
                    placeholder: "Type your message...",
                    value: "{draft}",
                    oninput: move |evt| chat.set_draft(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            chat.send_draft();
                        }
                    },
                }
                button {
                    class: "c-button c-button--hero c-chatbot__send",
                    aria_label: "Send message",
                    disabled: !can_send,
                    onclick: move |_| chat.send_draft(),
                    Icon { name: "send" }
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> Element {
    let side = if message.is_bot { "bot" } else { "user" };
    let time = message.time_label();

    rsx! {
        div { class: "c-chatbot__message c-chatbot__message--{side}",
            if message.is_bot {
                span { class: "c-chatbot__avatar c-chatbot__avatar--small", Icon { name: "bot" } }
            }
            div { class: "c-chatbot__bubble",
                p { "{message.content}" }
                span { class: "c-chatbot__time", "{time}" }
            }
            if !message.is_bot {
                span { class: "c-chatbot__avatar c-chatbot__avatar--small", Icon { name: "user" } }
            }
        }
    }
}

#[component]
fn QuickAction(text: &'static str, onpick: EventHandler<&'static str>) -> Element {
    rsx! {
        button {
            class: "c-chip",
            onclick: move |_| onpick.call(text),
            "{text}"
        }
    }
}
