use api::{Client, NewOrder};
use dioxus::prelude::*;

use crate::Route;
use ui::{format_vnd, use_auth, use_cart, Footer, Header};

/// Checkout page: delivery form next to the order summary. Submitting posts
/// one order whose `total_amount` is the cart total, then clears the cart.
#[component]
pub fn Checkout() -> Element {
    let auth = use_auth();
    let cart = use_cart();
    let nav = use_navigator();
    let mut receiver_name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let receiver = receiver_name().trim().to_string();
            let addr = address().trim().to_string();
            let phone = phone_number().trim().to_string();

            if receiver.is_empty() || addr.is_empty() || phone.is_empty() {
                error.set(Some("Please fill in all delivery fields.".to_string()));
                return;
            }
            let Some(user) = auth.user() else {
                return;
            };

            let items = cart.items();
            let order = NewOrder {
                user_id: user.id,
                receiver_name: receiver,
                address: addr,
                phone_number: phone,
                total_amount: cart.total(),
                items,
            };
            match Client::new().create_order(&order).await {
                Ok(()) => {
                    let mut cart = cart;
                    cart.clear_local();
                    nav.push(Route::Orders {});
                }
                Err(err) => {
                    tracing::error!("Failed to create order: {err}");
                    error.set(Some(err.message()));
                }
            }
        });
    };

    if cart.is_empty() {
        return rsx! {
            div {
                class: "page",
                Header {}
                main {
                    class: "page-main centered",
                    div {
                        class: "empty-state",
                        p { class: "muted-text", "Your cart is empty." }
                        a { class: "primary-button", href: "/products", "Continue shopping" }
                    }
                }
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
                    class: "content-narrow",
                    h1 { class: "page-title", "Checkout" }
                    if let Some(err) = error() {
                        p { class: "error-text", "{err}" }
                    }
                    div {
                        class: "checkout-grid",
                        div {
                            class: "panel",
                            h2 { class: "section-title", "Delivery details" }
                            form {
                                onsubmit: handle_submit,
                                div {
                                    class: "form-group",
                                    label { class: "form-label", r#for: "receiver", "Receiver name" }
                                    input {
                                        class: "form-input",
                                        id: "receiver",
                                        r#type: "text",
                                        value: receiver_name(),
                                        oninput: move |evt| receiver_name.set(evt.value()),
                                        required: true,
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { class: "form-label", r#for: "address", "Address" }
                                    input {
                                        class: "form-input",
                                        id: "address",
                                        r#type: "text",
                                        value: address(),
                                        oninput: move |evt| address.set(evt.value()),
                                        required: true,
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { class: "form-label", r#for: "phone", "Phone number" }
                                    input {
                                        class: "form-input",
                                        id: "phone",
                                        r#type: "tel",
                                        value: phone_number(),
                                        oninput: move |evt| phone_number.set(evt.value()),
                                        required: true,
                                    }
                                }
                                button { class: "confirm-button wide", r#type: "submit", "Place order" }
                            }
                        }
                        div {
                            class: "panel",
                            h2 { class: "section-title", "Order summary" }
                            for item in cart.items() {
                                div {
                                    key: "{item.product_id}",
                                    class: "summary-row",
                                    img {
                                        class: "summary-thumb",
                                        src: "{item.image_url}",
                                        alt: "{item.name}",
                                    }
                                    div {
                                        class: "summary-body",
                                        h3 { class: "summary-name", "{item.name}" }
                                        p {
                                            class: "muted-text",
                                            {format_vnd(item.price)}
                                            " × {item.quantity}"
                                        }
                                    }
                                }
                            }
                            div {
                                class: "summary-total",
                                h3 {
                                    class: "total-text",
                                    "Total: "
                                    {format_vnd(cart.total())}
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
