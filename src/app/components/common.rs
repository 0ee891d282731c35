use dioxus::prelude::*;

use crate::app::components::Icon;

// Gradient hero band at the top of every inner page (BEM: c-page-hero)
#[component]
pub fn PageHero(subtitle: String, children: Element) -> Element {
    rsx! {
        section { class: "c-page-hero",
            div { class: "c-page-hero__glow" }
            div { class: "c-page-hero__content",
                h1 { class: "c-page-hero__title", {children} }
                p { class: "c-page-hero__subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn SectionHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "c-section-header",
            h2 { class: "c-section-header__title", "{title}" }
            p { class: "c-section-header__subtitle", "{subtitle}" }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: String,
    description: String,
    action_text: Option<String>,
    action_handler: Option<EventHandler>,
) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon",
                Icon { name: icon }
            }
            h3 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
            if let (Some(text), Some(handler)) = (action_text, action_handler) {
                button {
                    onclick: move |_| handler.call(()),
                    class: "c-button c-button--outline",
                    "{text}"
                }
            }
        }
    }
}
