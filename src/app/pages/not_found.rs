use dioxus::prelude::*;

use crate::app::components::EmptyState;
use crate::app::pages::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let nav = navigator();

    tracing::warn!(path = %path, "Page not found");

    rsx! {
        section { class: "c-section c-section--center",
            EmptyState {
                icon: "globe",
                title: "Page not found",
                description: format!("Nothing lives at {path} yet."),
                action_text: "Back to home".to_string(),
                action_handler: move |_| { nav.push(Route::Home {}); },
            }
        }
    }
}
