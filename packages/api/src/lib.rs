//! # API crate — typed REST client for the storefront backend
//!
//! The backend is an external collaborator; this crate is a thin, typed layer
//! over its JSON contract and nothing more. One method per endpoint, one
//! error-mapping rule for all of them (see [`error`]).
//!
//! ## Endpoints covered
//!
//! | Area | Calls |
//! |------|-------|
//! | Users | `login`, `register` |
//! | Products | `products`, `product`, `create_product`, `update_product`, `delete_product` |
//! | Cart | `cart`, `add_to_cart`, `update_cart_quantity`, `remove_from_cart` |
//! | Orders | `orders_for_user`, `all_orders`, `create_order`, `update_order_status` |
//!
//! No retries, no timeouts, no cancellation: a hung request is the caller's
//! loading state, exactly as the UI expects.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod error;
pub mod models;

pub use error::ApiError;
pub use models::{
    cart_count, cart_total, AddToCart, CartItem, LoginRequest, NewOrder, Order, OrderStatus,
    Product, ProductInput, RegisterRequest, Role, SessionUser,
};

/// Backend origin. Overridable at compile time for deployed builds.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

fn base_url() -> &'static str {
    option_env!("STOREFRONT_API_BASE").unwrap_or(DEFAULT_BASE_URL)
}

/// Client for the storefront REST backend.
///
/// Cheap to construct; callers create one per interaction rather than passing
/// a handle around.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Serde shape of the create-product acknowledgement.
#[derive(serde::Deserialize)]
struct CreatedProduct {
    #[serde(rename = "productId")]
    product_id: i64,
}

impl Client {
    pub fn new() -> Self {
        Self::with_base(base_url())
    }

    /// Client against an explicit origin, used by tests.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Decode a success body, or map a failure response to [`ApiError::Api`]
    /// by extracting the backend's `message` field.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message: error::extract_message(&body),
            })
        }
    }

    /// Like [`Self::decode`] but for acknowledgement bodies we never read.
    async fn ack(resp: reqwest::Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message: error::extract_message(&body),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        Self::decode(resp).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(resp).await
    }

    // --- users ---

    /// `POST /api/users/login` → the session user on success.
    pub async fn login(&self, req: &LoginRequest) -> Result<SessionUser, ApiError> {
        self.post_json("/api/users/login", req).await
    }

    /// `POST /api/users/register`. The created-ack body is discarded.
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/users/register"))
            .json(req)
            .send()
            .await?;
        Self::ack(resp).await
    }

    // --- products ---

    /// `GET /api/products`.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products").await
    }

    /// `GET /api/products/:id`.
    pub async fn product(&self, id: i64) -> Result<Product, ApiError> {
        self.get_json(&format!("/api/products/{id}")).await
    }

    /// `POST /api/products` → the new product id.
    pub async fn create_product(&self, input: &ProductInput) -> Result<i64, ApiError> {
        let created: CreatedProduct = self.post_json("/api/products", input).await?;
        Ok(created.product_id)
    }

    /// `PUT /api/products/:id`.
    pub async fn update_product(&self, id: i64, input: &ProductInput) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/products/{id}")))
            .json(input)
            .send()
            .await?;
        Self::ack(resp).await
    }

    /// `DELETE /api/products/:id`. The admin's `user_id` rides in the body.
    pub async fn delete_product(&self, id: i64, user_id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/products/{id}")))
            .json(&serde_json::json!({ "user_id": user_id }))
            .send()
            .await?;
        Self::ack(resp).await
    }

    // --- cart ---

    /// `GET /api/cart/:userId` — the user's current line items.
    pub async fn cart(&self, user_id: i64) -> Result<Vec<CartItem>, ApiError> {
        self.get_json(&format!("/api/cart/{user_id}")).await
    }

    /// `POST /api/cart/`.
    pub async fn add_to_cart(&self, req: &AddToCart) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/cart/"))
            .json(req)
            .send()
            .await?;
        Self::ack(resp).await
    }

    /// `PUT /api/cart/:userId/:productId` with the new quantity.
    pub async fn update_cart_quantity(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/cart/{user_id}/{product_id}")))
            .json(&serde_json::json!({ "quantity": quantity }))
            .send()
            .await?;
        Self::ack(resp).await
    }

    /// `DELETE /api/cart/:userId/:productId`.
    pub async fn remove_from_cart(&self, user_id: i64, product_id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/cart/{user_id}/{product_id}")))
            .send()
            .await?;
        Self::ack(resp).await
    }

    // --- orders ---

    /// `GET /api/orders/:userId` — the customer's own orders.
    pub async fn orders_for_user(&self, user_id: i64) -> Result<Vec<Order>, ApiError> {
        self.get_json(&format!("/api/orders/{user_id}")).await
    }

    /// `GET /api/orders?user_id=` — every order, admin view. Each record
    /// carries the ordering `username`.
    pub async fn all_orders(&self, admin_user_id: i64) -> Result<Vec<Order>, ApiError> {
        self.get_json(&format!("/api/orders?user_id={admin_user_id}"))
            .await
    }

    /// `POST /api/orders`.
    pub async fn create_order(&self, order: &NewOrder) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/orders"))
            .json(order)
            .send()
            .await?;
        Self::ack(resp).await
    }

    /// `PUT /api/orders/:id/status` — the Shipping → Received transition.
    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/orders/{order_id}/status")))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;
        Self::ack(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = Client::with_base("https://shop.example");
        assert_eq!(client.url("/api/products"), "https://shop.example/api/products");
    }

    #[test]
    fn test_created_product_wire_shape() {
        let created: CreatedProduct = serde_json::from_str(r#"{"productId": 17}"#).unwrap();
        assert_eq!(created.product_id, 17);
    }
}
