use api::Product;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::cart::{use_cart, CartError};
use crate::format::format_vnd;
use crate::redirect;

/// One tile in the product grid: image, name, price, add-to-cart and a link
/// to the detail page. Adding while logged out redirects to the login page
/// without touching the cart.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let auth = use_auth();
    let cart = use_cart();
    let mut error = use_signal(|| Option::<String>::None);

    let added = product.clone();
    let handle_add = move |_| {
        let product = added.clone();
        async move {
            if !auth.is_authenticated() {
                redirect("/login");
                return;
            }
            let mut cart = cart;
            if let Err(err) = cart.add_to_cart(&product).await {
                match err {
                    CartError::Unauthorized => redirect("/login"),
                    other => {
                        tracing::error!("Failed to add to cart: {other}");
                        error.set(Some(other.to_string()));
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "product-card",
            img {
                class: "product-card-image",
                src: "{product.image_url}",
                alt: "{product.name}",
            }
            h3 { class: "product-card-name", "{product.name}" }
            p { class: "product-card-price", {format_vnd(product.price)} }
            if let Some(err) = error() {
                p { class: "error-text", "{err}" }
            }
            div {
                class: "product-card-actions",
                button {
                    class: "primary-button",
                    onclick: handle_add,
                    "Add to cart"
                }
                a {
                    class: "secondary-button",
                    href: "/products/{product.id}",
                    "View details"
                }
            }
        }
    }
}
