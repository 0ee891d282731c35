//! Orbital timeline
//!
//! Vertical axis with alternating cards. Clicking a card or its dot expands
//! it (collapsing any other) and makes the related milestones pulse.

use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::domain::models::TimelineItem;
use crate::shared::hooks::{use_orbital_timeline, OrbitalTimelineState};

#[component]
pub fn OrbitalTimeline(items: &'static [TimelineItem]) -> Element {
    let timeline = use_orbital_timeline(items);

    rsx! {
        div { class: "c-orbital",
            div { class: "c-orbital__axis" }
            div { class: "c-orbital__items",
                for (index, item) in items.iter().enumerate() {
                    OrbitalNode {
                        key: "{item.id}",
                        item: *item,
                        index: index,
                        timeline: timeline,
                    }
                }
            }
        }
    }
}

#[component]
fn OrbitalNode(item: TimelineItem, index: usize, timeline: OrbitalTimelineState) -> Element {
    let (expanded, related, pulsing) = {
        let selection = timeline.selection.read();
        (
            selection.is_expanded(item.id),
            selection.is_related_to_active(item.id, timeline.items),
            selection.is_pulsing(item.id),
        )
    };

    let id = item.id;
    let side = if index % 2 == 0 { "left" } else { "right" };
    let dot_state = if expanded {
        "c-orbital__dot--expanded"
    } else if related {
        "c-orbital__dot--related"
    } else {
        ""
    };
    let pulse = if pulsing { "is-pulsing" } else { "" };
    let card_state = if expanded { "c-orbital__card--expanded" } else { "" };
    let status_label = item.status.label();
    let status_modifier = item.status.modifier();
    let show_links = expanded && !item.related_ids.is_empty();

    rsx! {
        div { class: "c-orbital__row c-orbital__row--{side}",
            button {
                class: "c-orbital__dot {dot_state} {pulse}",
                aria_label: "{item.title}",
                aria_expanded: "{expanded}",
                onclick: move |_| timeline.toggle(id),
                Icon { name: item.glyph }
            }

            div { class: "c-orbital__slot",
                div {
                    class: "c-orbital__card {card_state}",
                    onclick: move |_| timeline.toggle(id),

                    div { class: "c-orbital__date", "{item.date}" }
                    h3 { class: "c-orbital__title", "{item.title}" }
                    span { class: "c-badge c-badge--{status_modifier}", "{status_label}" }
                    p { class: "c-orbital__content", "{item.content}" }

                    div { class: "c-energy",
                        div { class: "c-energy__label",
                            span { Icon { name: "zap" } " Energy Level" }
                            span { class: "c-energy__value", "{item.energy}%" }
                        }
                        div { class: "c-energy__track",
                            div { class: "c-energy__fill", style: "width: {item.energy}%;" }
                        }
                    }

                    if show_links {
                        div { class: "c-orbital__links",
                            div { class: "c-orbital__links-title",
                                Icon { name: "link" }
                                h4 { "Connected Milestones" }
                            }
                            div { class: "c-orbital__links-list",
                                for related_id in item.related_ids.iter().copied() {
                                    RelatedMilestone {
                                        key: "{related_id}",
                                        id: related_id,
                                        timeline: timeline,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RelatedMilestone(id: u32, timeline: OrbitalTimelineState) -> Element {
    let title = timeline.title_of(id).unwrap_or("Unknown milestone");

    rsx! {
        button {
            class: "c-button c-button--outline c-orbital__link",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                timeline.toggle(id);
            },
            "{title} "
            Icon { name: "arrow-right" }
        }
    }
}
