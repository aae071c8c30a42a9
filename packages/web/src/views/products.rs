use api::{Client, Product};
use dioxus::prelude::*;

use ui::{use_cart, Footer, Header, ProductCard};

/// Catalog page: the full product list with a live name filter and a
/// cart-count badge.
#[component]
pub fn Products() -> Element {
    let mut products = use_signal(Vec::<Product>::new);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let cart = use_cart();

    let _loader = use_resource(move || async move {
        match Client::new().products().await {
            Ok(list) => products.set(list),
            Err(err) => {
                tracing::error!("Failed to fetch products: {err}");
                error.set(Some(err.message()));
            }
        }
        loading.set(false);
    });

    // Case-insensitive substring filter on the product name.
    let filtered = use_memo(move || {
        let term = search().to_lowercase();
        products()
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .collect::<Vec<_>>()
    });

    if loading() {
        return rsx! {
            div {
                class: "page",
                Header {}
                main { class: "page-main centered", p { class: "muted-text", "Loading..." } }
                Footer {}
            }
        };
    }

    rsx! {
        div {
            class: "page",
            Header {}
            main {
                class: "page-main",
                div {
                    class: "content-wide",
                    div {
                        class: "catalog-toolbar",
                        h1 { class: "page-title", "Products" }
                        div {
                            class: "catalog-tools",
                            input {
                                class: "search-input",
                                r#type: "text",
                                placeholder: "Search products...",
                                value: search(),
                                oninput: move |evt| search.set(evt.value()),
                            }
                            a {
                                class: "cart-link",
                                href: "/cart",
                                "Cart"
                                if cart.count() > 0 {
                                    span { class: "cart-badge", "{cart.count()}" }
                                }
                            }
                        }
                    }
                    if let Some(err) = error() {
                        p { class: "error-text", "{err}" }
                    }
                    div {
                        class: "product-grid",
                        if filtered().is_empty() {
                            p { class: "muted-text", "No products match your search." }
                        } else {
                            for product in filtered() {
                                ProductCard { key: "{product.id}", product }
                            }
                        }
                    }
                }
            }
            Footer {}
        }
    }
}
