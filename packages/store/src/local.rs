//! # localStorage session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the serialized [`SessionUser`] under the single
//! [`SESSION_KEY`] key in the browser's `localStorage` via `web-sys`.
//!
//! All methods silently swallow storage errors (private browsing, quota,
//! corrupted record): a read that fails degrades to "logged out" rather than
//! crashing the app. There is no expiry and no validation of the stored
//! record — a tampered value that still parses is trusted.

use crate::models::SessionUser;
use crate::session::{SessionStore, SESSION_KEY};

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the storage handle is re-acquired from the
/// window on every operation, which is cheap.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<SessionUser> {
        let raw = Self::storage()?.get_item(SESSION_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, user: &SessionUser) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
