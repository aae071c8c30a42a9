//! This crate contains all shared UI for the workspace: the session and cart
//! contexts, the page chrome, and the product card.

mod auth;
pub use auth::{use_auth, AuthContext, AuthProvider, AuthState};

mod cart;
pub use cart::{use_cart, CartContext, CartError, CartProvider};

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;

mod product_card;
pub use product_card::ProductCard;

mod format;
pub use format::format_vnd;

/// Hard navigation helper for places that sit below the router (shared
/// components cannot name the app's `Route` type).
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("redirect to {path}");
    }
}
