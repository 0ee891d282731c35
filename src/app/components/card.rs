use dioxus::prelude::*;

use crate::app::components::Icon;

#[component]
pub fn Card(
    title: Option<String>,
    glyph: Option<&'static str>,
    featured: Option<bool>,
    children: Element,
) -> Element {
    let featured = featured.unwrap_or(false);
    let featured_class = if featured { "c-card--featured" } else { "" };

    rsx! {
        div {
            class: "c-card {featured_class}",
            if title.is_some() || glyph.is_some() {
                div {
                    class: "c-card__header",
                    if let Some(name) = glyph {
                        span { class: "c-card__badge", Icon { name: name } }
                    }
                    if let Some(title) = title {
                        h3 {
                            class: "c-card__title",
                            "{title}"
                        }
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
