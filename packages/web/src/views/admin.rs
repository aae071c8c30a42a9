//! Admin panel: order management and product CRUD behind the admin guard.

use api::{Client, Order, OrderStatus, Product, ProductInput};
use dioxus::prelude::*;

use ui::{format_vnd, use_auth, Footer, Header};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Orders,
    Products,
}

/// Text state of the create/edit product forms. Price stays a string until
/// submit so partial input never fights the field.
#[derive(Clone, Debug, Default, PartialEq)]
struct ProductForm {
    name: String,
    price: String,
    image_url: String,
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| *p >= 0.0)
}

#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| Tab::Orders);
    let mut orders = use_signal(Vec::<Order>::new);
    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut new_product = use_signal(ProductForm::default);
    let mut edit = use_signal(|| Option::<(i64, ProductForm)>::None);

    // Refetches whenever the active tab changes.
    let _loader = use_resource(move || async move {
        let Some(user) = auth.user() else {
            return;
        };
        loading.set(true);
        match tab() {
            Tab::Orders => match Client::new().all_orders(user.id).await {
                Ok(list) => orders.set(list),
                Err(err) => {
                    tracing::error!("Failed to fetch orders: {err}");
                    error.set(Some(err.message()));
                }
            },
            Tab::Products => match Client::new().products().await {
                Ok(list) => products.set(list),
                Err(err) => {
                    tracing::error!("Failed to fetch products: {err}");
                    error.set(Some(err.message()));
                }
            },
        }
        loading.set(false);
    });

    let handle_delivered = move |order_id: i64| async move {
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

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let Some(user) = auth.user() else {
                return;
            };
            let form = new_product();
            let name = form.name.trim().to_string();
            let image_url = form.image_url.trim().to_string();
            if name.is_empty() || image_url.is_empty() {
                error.set(Some("Please fill in all product fields.".to_string()));
                return;
            }
            let Some(price) = parse_price(&form.price) else {
                error.set(Some("Please enter a valid price.".to_string()));
                return;
            };
            let input = ProductInput {
                name,
                price,
                image_url,
                user_id: user.id,
            };
            match Client::new().create_product(&input).await {
                Ok(id) => {
                    let mut list = products();
                    list.push(Product {
                        id,
                        name: input.name,
                        price,
                        image_url: input.image_url,
                        description: None,
                        stock: 0,
                    });
                    products.set(list);
                    new_product.set(ProductForm::default());
                }
                Err(err) => {
                    tracing::error!("Failed to add product: {err}");
                    error.set(Some(err.message()));
                }
            }
        });
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let Some(user) = auth.user() else {
                return;
            };
            let Some((id, form)) = edit() else {
                return;
            };
            let Some(price) = parse_price(&form.price) else {
                error.set(Some("Please enter a valid price.".to_string()));
                return;
            };
            let input = ProductInput {
                name: form.name.trim().to_string(),
                price,
                image_url: form.image_url.trim().to_string(),
                user_id: user.id,
            };
            match Client::new().update_product(id, &input).await {
                Ok(()) => {
                    let patched = products()
                        .into_iter()
                        .map(|mut product| {
                            if product.id == id {
                                product.name = input.name.clone();
                                product.price = price;
                                product.image_url = input.image_url.clone();
                            }
                            product
                        })
                        .collect();
                    products.set(patched);
                    edit.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to update product: {err}");
                    error.set(Some(err.message()));
                }
            }
        });
    };

    let handle_delete = move |product_id: i64| async move {
        error.set(None);
        let Some(user) = auth.user() else {
            return;
        };
        match Client::new().delete_product(product_id, user.id).await {
            Ok(()) => {
                let remaining = products()
                    .into_iter()
                    .filter(|product| product.id != product_id)
                    .collect();
                products.set(remaining);
            }
            Err(err) => {
                tracing::error!("Failed to delete product: {err}");
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
                    class: "content-wide",
                    h1 { class: "page-title", "Administration" }
                    if let Some(err) = error() {
                        p { class: "error-text", "{err}" }
                    }
                    div {
                        class: "tab-bar",
                        button {
                            class: if tab() == Tab::Orders { "tab-button active" } else { "tab-button" },
                            onclick: move |_| tab.set(Tab::Orders),
                            "Orders"
                        }
                        button {
                            class: if tab() == Tab::Products { "tab-button active" } else { "tab-button" },
                            onclick: move |_| tab.set(Tab::Products),
                            "Products"
                        }
                    }

                    if tab() == Tab::Orders {
                        h2 { class: "section-title", "All orders" }
                        if orders().is_empty() {
                            p { class: "muted-text centered-text", "No orders yet." }
                        } else {
                            for (index, order) in orders().into_iter().enumerate() {
                                div {
                                    key: "{order.id}",
                                    class: "panel order-card",
                                    div {
                                        class: "order-card-head",
                                        h3 {
                                            class: "order-card-title",
                                            "Order #{index + 1} (ID: {order.id})"
                                        }
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
                                    p {
                                        class: "muted-text",
                                        "Ordered by: "
                                        {order.username.clone().unwrap_or_else(|| "unknown".to_string())}
                                    }
                                    p { class: "muted-text", "Placed: {order.created_at}" }
                                    p { class: "muted-text", "Receiver: {order.receiver_name}" }
                                    p { class: "muted-text", "Address: {order.address}" }
                                    p { class: "muted-text", "Phone: {order.phone_number}" }
                                    div {
                                        class: "order-items",
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
                                            onclick: move |_| handle_delivered(order.id),
                                            "Confirm delivered"
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        h2 { class: "section-title", "Products" }
                        div {
                            class: "panel",
                            h3 { class: "section-title", "Add a product" }
                            form {
                                onsubmit: handle_add,
                                div {
                                    class: "form-group",
                                    label { class: "form-label", r#for: "new-name", "Name" }
                                    input {
                                        class: "form-input",
                                        id: "new-name",
                                        r#type: "text",
                                        value: new_product().name,
                                        oninput: move |evt| new_product.with_mut(|f| f.name = evt.value()),
                                        required: true,
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { class: "form-label", r#for: "new-price", "Price (VND)" }
                                    input {
                                        class: "form-input",
                                        id: "new-price",
                                        r#type: "number",
                                        value: new_product().price,
                                        oninput: move |evt| new_product.with_mut(|f| f.price = evt.value()),
                                        required: true,
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { class: "form-label", r#for: "new-image", "Image URL" }
                                    input {
                                        class: "form-input",
                                        id: "new-image",
                                        r#type: "text",
                                        value: new_product().image_url,
                                        oninput: move |evt| new_product.with_mut(|f| f.image_url = evt.value()),
                                        required: true,
                                    }
                                }
                                button { class: "confirm-button", r#type: "submit", "Add product" }
                            }
                        }

                        if products().is_empty() {
                            p { class: "muted-text centered-text", "No products yet." }
                        } else {
                            for product in products() {
                                div {
                                    key: "{product.id}",
                                    class: "panel",
                                    if edit().as_ref().is_some_and(|(id, _)| *id == product.id) {
                                        form {
                                            onsubmit: handle_save,
                                            div {
                                                class: "form-group",
                                                label { class: "form-label", "Name" }
                                                input {
                                                    class: "form-input",
                                                    r#type: "text",
                                                    value: edit().map(|(_, f)| f.name).unwrap_or_default(),
                                                    oninput: move |evt| edit.with_mut(|e| {
                                                        if let Some((_, form)) = e {
                                                            form.name = evt.value();
                                                        }
                                                    }),
                                                    required: true,
                                                }
                                            }
                                            div {
                                                class: "form-group",
                                                label { class: "form-label", "Price (VND)" }
                                                input {
                                                    class: "form-input",
                                                    r#type: "number",
                                                    value: edit().map(|(_, f)| f.price).unwrap_or_default(),
                                                    oninput: move |evt| edit.with_mut(|e| {
                                                        if let Some((_, form)) = e {
                                                            form.price = evt.value();
                                                        }
                                                    }),
                                                    required: true,
                                                }
                                            }
                                            div {
                                                class: "form-group",
                                                label { class: "form-label", "Image URL" }
                                                input {
                                                    class: "form-input",
                                                    r#type: "text",
                                                    value: edit().map(|(_, f)| f.image_url).unwrap_or_default(),
                                                    oninput: move |evt| edit.with_mut(|e| {
                                                        if let Some((_, form)) = e {
                                                            form.image_url = evt.value();
                                                        }
                                                    }),
                                                    required: true,
                                                }
                                            }
                                            div {
                                                class: "form-actions",
                                                button { class: "primary-button", r#type: "submit", "Save" }
                                                button {
                                                    class: "secondary-button",
                                                    r#type: "button",
                                                    onclick: move |_| edit.set(None),
                                                    "Cancel"
                                                }
                                            }
                                        }
                                    } else {
                                        ProductRow {
                                            product: product.clone(),
                                            on_edit: move |product: Product| {
                                                edit.set(Some((
                                                    product.id,
                                                    ProductForm {
                                                        name: product.name,
                                                        price: product.price.to_string(),
                                                        image_url: product.image_url,
                                                    },
                                                )));
                                            },
                                            on_delete: move |id: i64| {
                                                spawn(handle_delete(id));
                                            },
                                        }
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

/// Read-only product row with edit/delete actions.
#[component]
fn ProductRow(
    product: Product,
    on_edit: EventHandler<Product>,
    on_delete: EventHandler<i64>,
) -> Element {
    let edited = product.clone();

    rsx! {
        div {
            class: "admin-product-row",
            img {
                class: "summary-thumb",
                src: "{product.image_url}",
                alt: "{product.name}",
            }
            div {
                class: "summary-body",
                h3 { class: "summary-name", "{product.name}" }
                p {
                    class: "muted-text",
                    "Price: "
                    {format_vnd(product.price)}
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "secondary-button",
                    onclick: move |_| on_edit.call(edited.clone()),
                    "Edit"
                }
                button {
                    class: "danger-button",
                    onclick: move |_| on_delete.call(product.id),
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_accepts_plain_numbers() {
        assert_eq!(parse_price("120000"), Some(120_000.0));
        assert_eq!(parse_price(" 99.5 "), Some(99.5));
        assert_eq!(parse_price("0"), Some(0.0));
    }

    #[test]
    fn test_parse_price_rejects_garbage_and_negatives() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("-5"), None);
    }
}
