use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::app::pages::routes::Route;
use crate::config::use_site_config;
use crate::domain::models::NAV_ITEMS;
use crate::shared::hooks::use_scrolled;

/// Whether a nav entry should be highlighted for `current`. The root entry
/// only matches itself, the others also match their sub-paths.
pub fn is_nav_active(item_path: &str, current: &str) -> bool {
    if item_path == "/" {
        return current == "/";
    }
    match current.strip_prefix(item_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Resolve a site path to its route, unknown paths land on the 404 page
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| Route::PageNotFound {
        segments: path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

#[component]
pub fn Navbar() -> Element {
    let config = use_site_config();
    let scrolled = use_scrolled(config.scroll_threshold);
    let mut menu_open = use_signal(|| false);
    let current = use_route::<Route>().to_string();

    let surface = if scrolled() { "c-navbar--scrolled" } else { "" };
    let menu_glyph = if menu_open() { "close" } else { "menu" };

    rsx! {
        nav { class: "c-navbar {surface}",
            div { class: "c-navbar__inner",
                Link { to: Route::Home {}, class: "c-navbar__brand",
                    span { class: "c-navbar__logo", "FT" }
                    span { class: "c-navbar__name", "{config.company_name}" }
                }

                div { class: "c-navbar__links",
                    for item in NAV_ITEMS.iter() {
                        NavLink {
                            key: "{item.path}",
                            label: item.label,
                            path: item.path,
                            active: is_nav_active(item.path, &current),
                        }
                    }
                }

                div { class: "c-navbar__cta",
                    Link { to: Route::Contact {}, class: "c-button c-button--hero", "Get Started" }
                }

                button {
                    class: "c-button c-button--ghost c-navbar__toggle",
                    aria_label: "Toggle menu",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu_open.toggle(),
                    Icon { name: menu_glyph }
                }
            }

            if menu_open() {
                div { class: "c-navbar__mobile",
                    for item in NAV_ITEMS.iter() {
                        NavLink {
                            key: "{item.path}",
                            label: item.label,
                            path: item.path,
                            active: is_nav_active(item.path, &current),
                            onnavigate: move |_| menu_open.set(false),
                        }
                    }
                    Link {
                        to: Route::Contact {},
                        class: "c-button c-button--hero c-navbar__mobile-cta",
                        onclick: move |_| menu_open.set(false),
                        "Get Started"
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(
    label: &'static str,
    path: &'static str,
    active: bool,
    onnavigate: Option<EventHandler<MouseEvent>>,
) -> Element {
    let state = if active { "c-navbar__link--active" } else { "" };

    rsx! {
        Link {
            to: route_for(path),
            class: "c-navbar__link {state}",
            onclick: move |evt| {
                if let Some(handler) = &onnavigate {
                    handler.call(evt);
                }
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_itself() {
        assert!(is_nav_active("/", "/"));
        assert!(!is_nav_active("/", "/services"));
    }

    #[test]
    fn test_section_matches_sub_paths() {
        assert!(is_nav_active("/services", "/services"));
        assert!(is_nav_active("/services", "/services/cloud"));
        assert!(!is_nav_active("/services", "/servicesx"));
        assert!(!is_nav_active("/training", "/services"));
    }

    #[test]
    fn test_route_for_known_paths() {
        assert_eq!(route_for("/"), Route::Home {});
        assert_eq!(route_for("/training"), Route::Training {});
        assert_eq!(route_for("/contact"), Route::Contact {});
    }

    #[test]
    fn test_route_for_unknown_path_is_not_found() {
        assert_eq!(
            route_for("/privacy"),
            Route::PageNotFound { segments: vec!["privacy".to_string()] }
        );
    }
}
