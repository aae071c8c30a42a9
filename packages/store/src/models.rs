//! # Session user model
//!
//! [`SessionUser`] is the identity record the backend returns on login and the
//! only durable client-side state: it is written verbatim to persistent storage
//! and trusted verbatim on restore. No token or password is ever retained.

use serde::{Deserialize, Serialize};

/// Role granted by the backend at login time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The currently authenticated user: `{id, username, role}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"admin\"").unwrap(),
            Role::Admin
        );
    }

    #[test]
    fn test_session_user_roundtrip() {
        let user = SessionUser {
            id: 7,
            username: "quan".to_string(),
            role: Role::User,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert!(!back.is_admin());
    }

    #[test]
    fn test_admin_predicate() {
        let admin = SessionUser {
            id: 1,
            username: "root".to_string(),
            role: Role::Admin,
        };
        assert!(admin.is_admin());
    }
}
