use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::app::layouts::navbar::route_for;
use crate::config::use_site_config;
use crate::domain::models::{FooterGroup, FOOTER_GROUPS, SOCIAL_LINKS};

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();

    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__grid",
                div { class: "c-footer__brand",
                    div { class: "c-footer__logo",
                        span { class: "c-navbar__logo", "FT" }
                        span { class: "c-footer__name", "{config.company_name}" }
                    }
                    p { class: "c-footer__tagline", "{config.tagline}" }
                    div { class: "c-footer__socials",
                        for social in SOCIAL_LINKS.iter() {
                            a {
                                key: "{social.label}",
                                class: "c-footer__social",
                                href: "{social.href}",
                                aria_label: "{social.label}",
                                Icon { name: social.glyph }
                            }
                        }
                    }
                }

                for group in FOOTER_GROUPS.iter() {
                    FooterColumn { key: "{group.category}", group: *group }
                }

                div { class: "c-footer__column",
                    h3 { class: "c-footer__heading", "Contact" }
                    ul { class: "c-footer__contact",
                        li { Icon { name: "mail" } span { "{config.email}" } }
                        li { Icon { name: "phone" } span { "{config.phone}" } }
                        li { Icon { name: "map-pin" } span { "{config.location}" } }
                    }
                }
            }

            div { class: "c-footer__bottom",
                p { "© {config.copyright_year} {config.company_name}. All rights reserved." }
            }
        }
    }
}

#[component]
fn FooterColumn(group: FooterGroup) -> Element {
    rsx! {
        div { class: "c-footer__column",
            h3 { class: "c-footer__heading", "{group.category}" }
            ul { class: "c-footer__links",
                for link in group.links.iter() {
                    li { key: "{link.label}",
                        Link { to: route_for(link.path), class: "c-footer__link", "{link.label}" }
                    }
                }
            }
        }
    }
}
