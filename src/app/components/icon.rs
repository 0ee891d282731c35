use dioxus::prelude::*;

use crate::domain::models::Glyph;

/// Renders a glyph looked up by name. Unknown names render an empty slot.
#[component]
pub fn Icon(name: &'static str, class: Option<String>) -> Element {
    let extra = class.unwrap_or_default();

    match Glyph::from_name(name) {
        Some(glyph) => {
            let symbol = glyph.symbol();
            rsx! {
                span {
                    class: "c-icon c-icon--{name} {extra}",
                    role: "img",
                    aria_label: "{name}",
                    "{symbol}"
                }
            }
        }
        None => {
            tracing::warn!(glyph = name, "Unknown glyph requested");
            rsx! {
                span { class: "c-icon c-icon--missing {extra}" }
            }
        }
    }
}
