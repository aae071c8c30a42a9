//! Authentication context and hooks for the UI.
//!
//! The session is restored synchronously from persistent storage when the
//! provider mounts, so guards and pages never see a half-initialized state.
//! There is no expiry and no server-side validation of the restored record.

use dioxus::prelude::*;
use store::{SessionStore, SessionUser};

fn make_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Session state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    /// Route-guard predicate: a user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Route-guard predicate: a user is present and holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }
}

/// Handle to the session state. The only writers are [`AuthContext::login`]
/// and [`AuthContext::logout`]; both keep memory and persistent storage in
/// step.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    state: Signal<AuthState>,
}

impl AuthContext {
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().is_admin()
    }

    /// Store the logged-in user in memory and persistent storage.
    pub fn login(&mut self, user: SessionUser) {
        make_store().save(&user);
        self.state.set(AuthState { user: Some(user) });
    }

    /// Clear both the in-memory session and the persisted record.
    pub fn logout(&mut self) {
        make_store().clear();
        self.state.set(AuthState::default());
    }
}

/// Get the current authentication context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Provider component that manages the session.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Restore the persisted user, if any, before the first render.
    let state = use_signal(|| AuthState {
        user: make_store().load(),
    });

    use_context_provider(|| AuthContext { state });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            id: 1,
            username: "quan".to_string(),
            role,
        }
    }

    #[test]
    fn test_logged_out_state_denies_both_predicates() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_user_role_is_authenticated_but_not_admin() {
        let state = AuthState {
            user: Some(user(Role::User)),
        };
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_admin_role_grants_admin_access() {
        let state = AuthState {
            user: Some(user(Role::Admin)),
        };
        assert!(state.is_authenticated());
        assert!(state.is_admin());
    }
}
