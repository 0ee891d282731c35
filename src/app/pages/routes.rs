use dioxus::prelude::*;

use crate::app::components::{Chatbot, Toaster};
use crate::app::layouts::{Footer, Navbar};
use crate::app::pages::{Contact, Expertise, Home, PageNotFound, Services, Training};
use crate::config::SiteConfig;
use crate::shared::hooks::{scroll_to_top, use_toast_provider};
use crate::shared::logging::log_route_change;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
    #[route("/training")]
    Training {},
    #[route("/expertise")]
    Expertise {},
    #[route("/contact")]
    Contact {},
    // Footer links to pages that do not exist yet land here
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Site app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context_provider(SiteConfig::default);
    use_toast_provider(config.toast_duration);

    let route = use_route::<Route>();
    use_effect(use_reactive((&route,), |(route,)| {
        log_route_change(&route.to_string());
        scroll_to_top();
    }));

    rsx! {
        document::Title { "{config.company_name}" }
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }

        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
            Footer {}
        }

        Chatbot {}
        Toaster {}
    }
}
