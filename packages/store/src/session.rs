//! # Session persistence contract
//!
//! A [`SessionStore`] holds at most one [`SessionUser`] under a single storage
//! key. Implementations are synchronous (browser `localStorage` is synchronous)
//! and infallible from the caller's perspective: a read that fails for any
//! reason degrades to `None`, and a failed write is dropped. The stored record
//! is not validated beyond deserialization — whatever parses is trusted.

use crate::models::SessionUser;

/// Storage key for the serialized session user. The only durable client state.
pub const SESSION_KEY: &str = "user";

/// Persistence backend for the authenticated session.
pub trait SessionStore {
    /// Restore the stored user, if any record exists and parses.
    fn load(&self) -> Option<SessionUser>;

    /// Persist the user, replacing any previous record.
    fn save(&self, user: &SessionUser);

    /// Remove the stored record. A subsequent [`SessionStore::load`] returns `None`.
    fn clear(&self);
}
