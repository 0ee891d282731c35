use dioxus::prelude::*;

use crate::app::components::{Card, EmptyState, Icon, PageHero};
use crate::domain::models::{Product, CATEGORY_ALL, PRODUCTS, PRODUCT_CATEGORIES};
use crate::domain::services::CatalogFilter;
use crate::shared::logging::log_catalog_filter;

#[component]
pub fn Training() -> Element {
    let mut filter = use_signal(CatalogFilter::default);

    let results: Vec<Product> = filter.read().apply(PRODUCTS).into_iter().copied().collect();
    let count = results.len();
    let noun = if count == 1 { "product" } else { "products" };
    let (category, search) = {
        let f = filter.read();
        (f.category.clone(), f.search.clone())
    };

    use_effect(move || {
        let f = filter.read();
        log_catalog_filter(&f.category, &f.search, f.apply(PRODUCTS).len());
    });

    let categories = std::iter::once(CATEGORY_ALL).chain(PRODUCT_CATEGORIES.iter().copied());

    rsx! {
        PageHero {
            subtitle: "Advanced Defense Systems & Technology Solutions for Modern Challenges",
            "Welcome to Xentric Technologies"
        }

        section { class: "c-section",
            div { class: "c-catalog__toolbar",
                div { class: "c-catalog__chips",
                    for name in categories {
                        button {
                            key: "{name}",
                            class: if category == name { "c-chip c-chip--active" } else { "c-chip" },
                            onclick: move |_| filter.write().category = name.to_string(),
                            "{name}"
                        }
                    }
                }
                div { class: "c-catalog__search",
                    Icon { name: "search" }
                    input {
                        class: "c-input",
                        r#type: "search",
                        placeholder: "Search products and services...",
                        value: "{search}",
                        oninput: move |evt| filter.write().search = evt.value(),
                    }
                }
            }

            p { class: "c-catalog__count", "Showing {count} {noun}" }

            if results.is_empty() {
                EmptyState {
                    icon: "search",
                    title: "No products found",
                    description: "Try a different category or search term.",
                    action_text: "Clear filters".to_string(),
                    action_handler: move |_| filter.write().reset(),
                }
            } else {
                div { class: "c-grid c-grid--2",
                    for product in results {
                        ProductCard { key: "{product.id}", product: product }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    rsx! {
        Card { title: product.title.to_string(), glyph: product.glyph,
            span { class: "c-card__tag", "{product.category}" }
            p { class: "c-card__text", "{product.summary}" }
            for (i, paragraph) in product.details.iter().enumerate() {
                p { key: "{i}", class: "c-card__text", "{paragraph}" }
            }
        }
    }
}
