use std::time::Duration;

use dioxus::prelude::*;

use crate::app::components::{Icon, OrbitalTimeline, PageHero, SectionHeader};
use crate::app::pages::routes::Route;
use crate::domain::models::{ServiceOffering, JOURNEY_TIMELINE, SERVICES};
use crate::shared::utils::sleep;

const TYPING_STEP: Duration = Duration::from_millis(120);

#[component]
pub fn Services() -> Element {
    let nav = navigator();

    rsx! {
        PageHero {
            subtitle: "Comprehensive technology solutions to accelerate your digital transformation",
            "Our "
            TypingText { text: "Services" }
        }

        section { class: "c-section",
            div { class: "c-grid c-grid--3",
                for service in SERVICES.iter() {
                    ServiceCard { key: "{service.title}", service: *service }
                }
            }
        }

        section { class: "c-section",
            SectionHeader {
                title: "Our Journey",
                subtitle: "Discover the milestones that shaped our innovative path",
            }
            OrbitalTimeline { items: JOURNEY_TIMELINE }
        }

        section { class: "c-section c-section--muted c-section--center",
            SectionHeader {
                title: "Need a Custom Solution?",
                subtitle: "Let's discuss how we can help transform your business with tailored technology solutions.",
            }
            button {
                class: "c-button c-button--hero",
                onclick: move |_| { nav.push(Route::Contact {}); },
                "Schedule Consultation"
            }
        }
    }
}

/// Reveals `text` one character at a time behind a blinking cursor
#[component]
fn TypingText(text: &'static str) -> Element {
    let mut shown = use_signal(|| 0_usize);
    let total = text.chars().count();

    use_future(move || async move {
        while *shown.peek() < total {
            sleep(TYPING_STEP).await;
            shown += 1;
        }
    });

    let visible: String = text.chars().take(shown()).collect();

    rsx! {
        span { class: "c-typing", aria_label: "{text}", "{visible}" }
    }
}

#[component]
fn ServiceCard(service: ServiceOffering) -> Element {
    rsx! {
        div { class: "c-service",
            div { class: "c-service__icon", Icon { name: service.glyph } }
            h3 { class: "c-service__title", "{service.title}" }
            p { class: "c-service__description", "{service.description}" }
            ul { class: "c-service__features",
                for feature in service.features.iter() {
                    li { key: "{feature}", class: "c-service__feature", "{feature}" }
                }
            }
        }
    }
}
