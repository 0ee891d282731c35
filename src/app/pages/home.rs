use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Icon, SectionHeader};
use crate::app::pages::routes::Route;
use crate::domain::models::{Stat, Testimonial, HOME_STATS, TESTIMONIALS};

#[component]
pub fn Home() -> Element {
    let nav = navigator();

    rsx! {
        section { class: "c-hero",
            div { class: "c-hero__glow" }
            div { class: "c-hero__content",
                h1 { class: "c-hero__title",
                    "Shape the "
                    span { class: "u-gradient-text", "Future" }
                    " with AI"
                }
                p { class: "c-hero__lead",
                    "We deliver cutting-edge technology solutions that transform businesses \
                     and accelerate growth in the digital age."
                }
                div { class: "c-hero__actions",
                    Button {
                        onclick: move |_| { nav.push(Route::Contact {}); },
                        "Get Started Today "
                        Icon { name: "arrow-right" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { nav.push(Route::Services {}); },
                        "Watch Demo"
                    }
                }
            }
            div { class: "c-hero__orb c-hero__orb--left" }
            div { class: "c-hero__orb c-hero__orb--right" }
        }

        section { class: "c-section",
            div { class: "c-stats",
                for stat in HOME_STATS.iter() {
                    StatTile { key: "{stat.label}", stat: *stat }
                }
            }
        }

        section { class: "c-section c-section--muted",
            SectionHeader {
                title: "What Our Clients Say",
                subtitle: "Trusted by industry leaders worldwide",
            }
            div { class: "c-grid c-grid--3",
                for testimonial in TESTIMONIALS.iter() {
                    TestimonialCard { key: "{testimonial.name}", testimonial: *testimonial }
                }
            }
        }

        section { class: "c-cta",
            h2 { class: "c-cta__title", "Ready to Transform Your Business?" }
            p { class: "c-cta__lead",
                "Join hundreds of companies that trust us with their digital transformation."
            }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| { nav.push(Route::Contact {}); },
                "Start Your Journey"
            }
        }
    }
}

#[component]
fn StatTile(stat: Stat) -> Element {
    rsx! {
        div { class: "c-stat",
            div { class: "c-stat__icon", Icon { name: stat.glyph } }
            div { class: "c-stat__value", "{stat.value}" }
            div { class: "c-stat__label", "{stat.label}" }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    rsx! {
        div { class: "c-testimonial",
            div { class: "c-testimonial__author",
                img {
                    class: "c-testimonial__avatar",
                    src: "{testimonial.avatar}",
                    alt: "{testimonial.name}",
                }
                div {
                    h4 { class: "c-testimonial__name", "{testimonial.name}" }
                    p { class: "c-testimonial__position", "{testimonial.position}" }
                }
            }
            div { class: "c-testimonial__rating", aria_label: "{testimonial.rating} out of 5",
                for i in 0..testimonial.rating {
                    Icon { key: "{i}", name: "star", class: "c-testimonial__star".to_string() }
                }
            }
            p { class: "c-testimonial__quote", "\"{testimonial.content}\"" }
        }
    }
}
