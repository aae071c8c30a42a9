use dioxus::prelude::*;

use crate::Route;
use ui::{format_vnd, use_cart, Footer, Header};

/// Cart page: line items with a quantity stepper, removal, and the order
/// total. A rejected decrement below 1 is surfaced inline; the stored
/// quantity is left untouched.
#[component]
pub fn Cart() -> Element {
    let cart = use_cart();
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let set_quantity = move |product_id: i64, quantity: i64| async move {
        error.set(None);
        let mut cart = cart;
        if let Err(err) = cart.update_quantity(product_id, quantity).await {
            tracing::error!("Failed to update quantity: {err}");
            error.set(Some(err.to_string()));
        }
    };

    let remove = move |product_id: i64| async move {
        error.set(None);
        let mut cart = cart;
        if let Err(err) = cart.remove_from_cart(product_id).await {
            tracing::error!("Failed to remove item: {err}");
            error.set(Some(err.to_string()));
        }
    };

    let items = cart.items();

    rsx! {
        div {
            class: "page",
            Header {}
            main {
                class: "page-main",
                div {
                    class: "content-narrow",
                    h1 { class: "page-title", "Your cart" }
                    if let Some(err) = error() {
                        p { class: "error-text", "{err}" }
                    }
                    if items.is_empty() {
                        div {
                            class: "empty-state",
                            p { class: "muted-text", "Your cart is empty." }
                            a { class: "primary-button", href: "/products", "Continue shopping" }
                        }
                    } else {
                        div {
                            class: "panel",
                            for item in items.clone() {
                                div {
                                    key: "{item.product_id}",
                                    class: "cart-row",
                                    img {
                                        class: "cart-thumb",
                                        src: "{item.image_url}",
                                        alt: "{item.name}",
                                    }
                                    div {
                                        class: "cart-row-body",
                                        h2 { class: "cart-row-name", "{item.name}" }
                                        p {
                                            class: "muted-text",
                                            "Unit price: "
                                            {format_vnd(item.price)}
                                        }
                                        div {
                                            class: "quantity-stepper",
                                            button {
                                                class: "stepper-button",
                                                onclick: move |_| set_quantity(item.product_id, item.quantity - 1),
                                                "−"
                                            }
                                            span { class: "stepper-value", "{item.quantity}" }
                                            button {
                                                class: "stepper-button",
                                                onclick: move |_| set_quantity(item.product_id, item.quantity + 1),
                                                "+"
                                            }
                                        }
                                        p {
                                            class: "cart-row-total",
                                            "Line total: "
                                            {format_vnd(item.price * item.quantity as f64)}
                                        }
                                    }
                                    button {
                                        class: "danger-button",
                                        onclick: move |_| remove(item.product_id),
                                        "Remove"
                                    }
                                }
                            }
                        }
                        div {
                            class: "panel",
                            h2 {
                                class: "cart-total",
                                "Order total: "
                                {format_vnd(cart.total())}
                            }
                            div {
                                class: "cart-actions",
                                a { class: "link-button", href: "/products", "Continue shopping" }
                                button {
                                    class: "confirm-button",
                                    onclick: move |_| {
                                        nav.push(Route::Checkout {});
                                    },
                                    "Checkout"
                                }
                            }
                        }
                    }
                }
            }
            Footer {}
        }
    }
}
