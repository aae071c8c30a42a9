use api::{Client, Product};
use dioxus::prelude::*;

use ui::{format_vnd, redirect, use_auth, use_cart, CartError, Footer, Header};

/// Single-product page: image, price, description, stock, add-to-cart.
#[component]
pub fn ProductDetail(id: i64) -> Element {
    let mut product = use_signal(|| Option::<Product>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let auth = use_auth();
    let cart = use_cart();

    let _loader = use_resource(move || async move {
        loading.set(true);
        match Client::new().product(id).await {
            Ok(found) => product.set(Some(found)),
            Err(err) => {
                tracing::error!("Failed to fetch product {id}: {err}");
                error.set(Some(err.message()));
            }
        }
        loading.set(false);
    });

    let handle_add = move |_| async move {
        if !auth.is_authenticated() {
            redirect("/login");
            return;
        }
        let Some(current) = product() else {
            return;
        };
        let mut cart = cart;
        match cart.add_to_cart(&current).await {
            Ok(()) => notice.set(Some(format!("{} was added to your cart.", current.name))),
            Err(CartError::Unauthorized) => redirect("/login"),
            Err(err) => {
                tracing::error!("Failed to add to cart: {err}");
                error.set(Some(err.to_string()));
            }
        }
    };

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

    let Some(current) = product() else {
        return rsx! {
            div {
                class: "page",
                Header {}
                main {
                    class: "page-main centered",
                    div {
                        class: "empty-state",
                        p {
                            class: "error-text",
                            {error().unwrap_or_else(|| "Product not found.".to_string())}
                        }
                        a { class: "secondary-button", href: "/products", "Back to products" }
                    }
                }
                Footer {}
            }
        };
    };

    rsx! {
        div {
            class: "page",
            Header {}
            main {
                class: "page-main",
                div {
                    class: "detail-card",
                    img {
                        class: "detail-image",
                        src: "{current.image_url}",
                        alt: "{current.name}",
                    }
                    div {
                        class: "detail-body",
                        h1 { class: "detail-title", "{current.name}" }
                        p { class: "detail-price", {format_vnd(current.price)} }
                        p {
                            class: "detail-description",
                            {current.description.clone().unwrap_or_else(|| "Description coming soon.".to_string())}
                        }
                        p { class: "detail-stock", "In stock: {current.stock}" }
                        if let Some(msg) = notice() {
                            p { class: "notice-text", "{msg}" }
                        }
                        if let Some(err) = error() {
                            p { class: "error-text", "{err}" }
                        }
                        div {
                            class: "detail-actions",
                            button { class: "primary-button", onclick: handle_add, "Add to cart" }
                            a { class: "secondary-button", href: "/products", "Back" }
                        }
                    }
                }
            }
            Footer {}
        }
    }
}
