use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::errors::CoreError;

/// Client-side authentication session state.
///
/// The value held by the front-end between login, logout and refresh flows.
/// `AuthState::default()` is the signed-out state and the logout reset value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Current user. `None` when unauthenticated.
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// An auth operation is in flight.
    pub is_loading: bool,
    /// Message from the last failed auth operation.
    pub error: Option<String>,
}

impl AuthState {
    /// Signed out with an auth operation in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// Signed in as `user`.
    #[must_use]
    pub const fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        }
    }

    /// Signed out after a failed auth operation.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Check that an authenticated state carries a user.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when `is_authenticated` is set but
    /// `user` is absent.
    pub fn check_invariants(&self) -> Result<(), CoreError> {
        if self.is_authenticated && self.user.is_none() {
            return Err(CoreError::Validation(
                "auth state is authenticated but has no user".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Role;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "alice@example.com".into(),
            display_name: "Alice".into(),
            role: Role::Collector,
            points: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn default_is_signed_out_and_idle() {
        let state = AuthState::default();
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn constructors_satisfy_invariants() {
        for state in [
            AuthState::loading(),
            AuthState::authenticated(user()),
            AuthState::failed("bad credentials"),
        ] {
            assert!(state.check_invariants().is_ok(), "{state:?}");
        }
    }

    #[test]
    fn failed_keeps_message_and_clears_user() {
        let state = AuthState::failed("bad credentials");
        assert_eq!(state.error.as_deref(), Some("bad credentials"));
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn authenticated_without_user_breaks_invariant() {
        let state = AuthState {
            is_authenticated: true,
            ..AuthState::default()
        };
        assert!(matches!(
            state.check_invariants(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn unauthenticated_may_still_carry_user() {
        let state = AuthState {
            user: Some(user()),
            ..AuthState::default()
        };
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn nullable_fields_serialize_as_null() {
        let json = serde_json::to_value(AuthState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user": null,
                "isAuthenticated": false,
                "isLoading": false,
                "error": null
            })
        );
    }
}
