use api::{Client, Order, OrderStatus};
use dioxus::prelude::*;

use ui::{format_vnd, use_auth, Footer, Header};

/// Order history: one card per order, newest state first from the backend.
/// While an order is still shipping, the customer can confirm receipt —
/// the only status transition that exists.
#[component]
pub fn Orders() -> Element {
    let auth = use_auth();
    let mut orders = use_signal(Vec::<Order>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let Some(user) = auth.user() else {
            return;
        };
        match Client::new().orders_for_user(user.id).await {
            Ok(list) => orders.set(list),
            Err(err) => {
                tracing::error!("Failed to fetch orders: {err}");
                error.set(Some(err.message()));
            }
        }
        loading.set(false);
    });

    let handle_received = move |order_id: i64| async move {
        match Client::new()
            .update_order_status(order_id, OrderStatus::Received)
            .await
        {
            Ok(()) => {
                let patched = orders()
                    .into_iter()
                    .map(|mut order| {
                        if order.id == order_id {
                            order.status = OrderStatus::Received;
                        }
                        order
                    })
                    .collect();
                orders.set(patched);
            }
            Err(err) => {
                tracing::error!("Failed to update order status: {err}");
                error.set(Some(err.message()));
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

    rsx! {
        div {
            class: "page",
            Header {}
            main {
                class: "page-main",
                div {
                    class: "content-narrow",
                    h1 { class: "page-title", "Your orders" }
                    if let Some(err) = error() {
                        p { class: "error-text", "{err}" }
                    }
                    if orders().is_empty() {
                        p { class: "muted-text centered-text", "You have no orders yet." }
                    } else {
                        for (index, order) in orders().into_iter().enumerate() {
                            div {
                                key: "{order.id}",
                                class: "panel order-card",
                                div {
                                    class: "order-card-head",
                                    h2 { class: "order-card-title", "Order #{index + 1}" }
                                    span {
                                        class: if order.status == OrderStatus::Shipping {
                                            "status-badge shipping"
                                        } else {
                                            "status-badge received"
                                        },
                                        if order.status == OrderStatus::Shipping {
                                            "Đang giao hàng"
                                        } else {
                                            "Đã nhận hàng"
                                        }
                                    }
                                }
                                p { class: "muted-text", "Placed: {order.created_at}" }
                                p { class: "muted-text", "Receiver: {order.receiver_name}" }
                                p { class: "muted-text", "Address: {order.address}" }
                                p { class: "muted-text", "Phone: {order.phone_number}" }
                                div {
                                    class: "order-items",
                                    h3 { class: "section-title", "Items" }
                                    for item in order.items.clone() {
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
                                                h4 { class: "summary-name", "{item.name}" }
                                                p {
                                                    class: "muted-text",
                                                    {format_vnd(item.price)}
                                                    " × {item.quantity}"
                                                }
                                            }
                                        }
                                    }
                                }
                                p {
                                    class: "order-total",
                                    "Total: "
                                    {format_vnd(order.total_amount)}
                                }
                                if order.status == OrderStatus::Shipping {
                                    button {
                                        class: "primary-button",
                                        onclick: move |_| handle_received(order.id),
                                        "I received this order"
                                    }
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
