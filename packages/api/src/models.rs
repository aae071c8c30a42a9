//! # Wire models for the storefront backend
//!
//! Every shape here mirrors the backend's JSON contract one-to-one; the client
//! consumes the contract as-is and never reinterprets it. Totals are computed
//! client-side with [`cart_total`] and trusted by the backend — they are never
//! re-verified after the fact.

use serde::{Deserialize, Serialize};

pub use store::{Role, SessionUser};

/// A product as listed by `GET /api/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock: i64,
}

/// One line of the authenticated user's cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub quantity: i64,
}

/// Order lifecycle. The backend stores the literal Vietnamese strings; the
/// only transition is Shipping → Received, triggered by customer or admin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Đang giao hàng")]
    Shipping,
    #[serde(rename = "Đã nhận hàng")]
    Received,
}

/// An order as returned by the orders endpoints. `username` is only populated
/// by the admin listing (`GET /api/orders?user_id=`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub receiver_name: String,
    pub address: String,
    pub phone_number: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub items: Vec<CartItem>,
    pub created_at: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// `POST /api/users/login` body. The selected role is part of the request.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// `POST /api/users/register` body.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Create/update body for a product. The backend checks `user_id` for admin
/// rights server-side.
#[derive(Clone, Debug, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub user_id: i64,
}

/// `POST /api/cart/` body. Add-to-cart always starts at quantity 1.
#[derive(Clone, Debug, Serialize)]
pub struct AddToCart {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// `POST /api/orders` body. `total_amount` must equal
/// `cart_total(&items)` — the backend persists it without recomputing.
#[derive(Clone, Debug, Serialize)]
pub struct NewOrder {
    pub user_id: i64,
    pub receiver_name: String,
    pub address: String,
    pub phone_number: String,
    pub total_amount: f64,
    pub items: Vec<CartItem>,
}

/// Sum of price × quantity over the cart.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * item.quantity as f64)
        .sum()
}

/// Total number of units in the cart, for the header badge.
pub fn cart_count(items: &[CartItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: i64) -> CartItem {
        CartItem {
            product_id: 1,
            name: "Áo thun".to_string(),
            price,
            image_url: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_cart_total_is_sum_of_lines() {
        let items = vec![item(120_000.0, 2), item(250_000.0, 1)];
        assert_eq!(cart_total(&items), 490_000.0);
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn test_cart_count_sums_quantities() {
        let items = vec![item(10.0, 2), item(20.0, 3)];
        assert_eq!(cart_count(&items), 5);
        assert_eq!(cart_count(&[]), 0);
    }

    #[test]
    fn test_order_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipping).unwrap(),
            "\"Đang giao hàng\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Received).unwrap(),
            "\"Đã nhận hàng\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"Đã nhận hàng\"").unwrap(),
            OrderStatus::Received
        );
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let product: Product = serde_json::from_str(
            r#"{"id": 3, "name": "Quần jean", "price": 350000, "image_url": "/img/3.jpg"}"#,
        )
        .unwrap();
        assert_eq!(product.description, None);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_order_without_username_is_customer_shaped() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 9, "user_id": 2, "receiver_name": "An", "address": "HCM",
                "phone_number": "0900", "total_amount": 120000,
                "status": "Đang giao hàng", "items": [], "created_at": "2025-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Shipping);
        assert!(order.username.is_none());
    }

    #[test]
    fn test_login_request_carries_role() {
        let body = serde_json::to_value(LoginRequest {
            username: "quan".to_string(),
            password: "secret".to_string(),
            role: Role::Admin,
        })
        .unwrap();
        assert_eq!(body["role"], "admin");
    }
}
