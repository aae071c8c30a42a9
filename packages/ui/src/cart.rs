//! Cart context: the authenticated user's pending line items, kept in sync
//! with the backend.
//!
//! Every mutation requires a logged-in user and reports its outcome as a
//! typed [`CartError`] instead of failing silently. All successful mutations
//! re-sync the cart from the backend, so the local copy never drifts from
//! what the server persisted.

use api::{AddToCart, ApiError, CartItem, Client, Product};
use dioxus::prelude::*;
use thiserror::Error;

use crate::auth::{use_auth, AuthContext};

/// Outcome of a refused or failed cart mutation.
#[derive(Debug, Error)]
pub enum CartError {
    /// No user is logged in; the caller should send them to the login page.
    #[error("Please log in to use the cart.")]
    Unauthorized,

    /// Quantities below 1 are rejected, not clamped; the stored quantity is
    /// left untouched.
    #[error("Quantity must be at least 1.")]
    InvalidQuantity,

    #[error("{0}")]
    Api(#[from] ApiError),
}

fn quantity_is_valid(quantity: i64) -> bool {
    quantity >= 1
}

/// Handle to the cart state. `Copy`, so event handlers can move it freely.
#[derive(Clone, Copy, PartialEq)]
pub struct CartContext {
    items: Signal<Vec<CartItem>>,
    auth: AuthContext,
}

impl CartContext {
    pub fn items(&self) -> Vec<CartItem> {
        self.items.read().clone()
    }

    /// Total number of units, for the header badge.
    pub fn count(&self) -> i64 {
        api::cart_count(&self.items.read())
    }

    /// Σ(price × quantity) over the current cart.
    pub fn total(&self) -> f64 {
        api::cart_total(&self.items.read())
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Full refetch from the backend, keyed by the current user. Logged-out
    /// users get an empty cart.
    pub async fn refresh(&mut self) {
        let Some(user) = self.auth.user() else {
            self.items.set(Vec::new());
            return;
        };
        match Client::new().cart(user.id).await {
            Ok(cart) => self.items.set(cart),
            Err(err) => tracing::error!("Failed to fetch cart: {err}"),
        }
    }

    /// Add one unit of `product`, then re-sync from the backend.
    pub async fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        let user = self.auth.user().ok_or(CartError::Unauthorized)?;
        Client::new()
            .add_to_cart(&AddToCart {
                user_id: user.id,
                product_id: product.id,
                quantity: 1,
            })
            .await?;
        self.refresh().await;
        Ok(())
    }

    /// Set the stored quantity for a product. Values below 1 are rejected
    /// before any network call.
    pub async fn update_quantity(
        &mut self,
        product_id: i64,
        quantity: i64,
    ) -> Result<(), CartError> {
        let user = self.auth.user().ok_or(CartError::Unauthorized)?;
        if !quantity_is_valid(quantity) {
            return Err(CartError::InvalidQuantity);
        }
        Client::new()
            .update_cart_quantity(user.id, product_id, quantity)
            .await?;
        self.refresh().await;
        Ok(())
    }

    /// Remove a line item, then re-sync from the backend.
    pub async fn remove_from_cart(&mut self, product_id: i64) -> Result<(), CartError> {
        let user = self.auth.user().ok_or(CartError::Unauthorized)?;
        Client::new().remove_from_cart(user.id, product_id).await?;
        self.refresh().await;
        Ok(())
    }

    /// Drop the local copy without touching the backend. Used after a
    /// successful checkout, which empties the cart server-side.
    pub fn clear_local(&mut self) {
        self.items.set(Vec::new());
    }
}

/// Get the current cart context.
pub fn use_cart() -> CartContext {
    use_context::<CartContext>()
}

/// Provider component for the cart. Must be nested inside [`crate::AuthProvider`];
/// the cart refetches whenever the user changes (login, logout, restore).
#[component]
pub fn CartProvider(children: Element) -> Element {
    let auth = use_auth();
    let items = use_signal(Vec::<CartItem>::new);

    let cart = use_context_provider(|| CartContext { items, auth });

    // Reading the user inside the resource subscribes it to session changes.
    let _sync = use_resource(move || async move {
        let mut cart = cart;
        let _user = auth.user();
        cart.refresh().await;
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_one_and_up_is_valid() {
        assert!(quantity_is_valid(1));
        assert!(quantity_is_valid(99));
    }

    #[test]
    fn test_zero_and_negative_quantities_are_rejected() {
        assert!(!quantity_is_valid(0));
        assert!(!quantity_is_valid(-3));
    }

    #[test]
    fn test_cart_errors_carry_display_messages() {
        assert_eq!(
            CartError::Unauthorized.to_string(),
            "Please log in to use the cart."
        );
        assert_eq!(
            CartError::InvalidQuantity.to_string(),
            "Quantity must be at least 1."
        );
    }
}
