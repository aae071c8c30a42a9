use std::sync::{Arc, Mutex};

use crate::models::SessionUser;
use crate::session::SessionStore;

/// In-memory SessionStore for testing and non-web fallback.
///
/// Stores the serialized record, not the struct, so load/save exercise the
/// same serde path the browser store does.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<SessionUser> {
        let guard = self.record.lock().ok()?;
        let raw = guard.as_ref()?;
        serde_json::from_str(raw).ok()
    }

    fn save(&self, user: &SessionUser) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        if let Ok(mut guard) = self.record.lock() {
            *guard = Some(raw);
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.record.lock() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user() -> SessionUser {
        SessionUser {
            id: 42,
            username: "alice".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = MemoryStore::new();
        store.save(&user());
        assert_eq!(store.load(), Some(user()));
    }

    #[test]
    fn test_save_replaces_previous_record() {
        let store = MemoryStore::new();
        store.save(&user());
        let other = SessionUser {
            id: 1,
            username: "root".to_string(),
            role: Role::Admin,
        };
        store.save(&other);
        assert_eq!(store.load(), Some(other));
    }

    #[test]
    fn test_clear_removes_record() {
        let store = MemoryStore::new();
        store.save(&user());
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_garbage_record_degrades_to_logged_out() {
        let store = MemoryStore::new();
        *store.record.lock().unwrap() = Some("not json".to_string());
        assert!(store.load().is_none());
    }
}
