use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{AppError, Role};

/// Local-storage key holding the serialized [`SessionUser`].
pub const SESSION_STORAGE_KEY: &str = "user";

/// The "logged in" identity, persisted wholesale to local storage.
///
/// Written on every login or signup and never verified. A later login
/// replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Serialize to the JSON stored under [`SESSION_STORAGE_KEY`].
    pub fn encode(&self) -> Result<String, AppError> {
        serde_json::to_string(self)
            .map_err(|e| AppError::internal(format!("Failed to encode session: {e}")))
    }

    pub fn decode(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::bad_request(format!("Malformed session record: {e}")))
    }
}

/// Client session: anonymous until a login or signup form is submitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(SessionUser),
}

impl SessionState {
    /// Restore from the raw stored value. Missing or unreadable records
    /// leave the session anonymous.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(SessionUser::decode) {
            Some(Ok(user)) => SessionState::Authenticated(user),
            _ => SessionState::Anonymous,
        }
    }

    /// Move to the authenticated state, overwriting any previous user.
    pub fn authenticate(&mut self, user: SessionUser) {
        *self = SessionState::Authenticated(user);
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    /// Name used in dashboard greetings; empty when anonymous.
    pub fn display_name(&self) -> &str {
        self.user().map(|u| u.name.as_str()).unwrap_or("")
    }
}

/// Login form submission. Credentials are only checked for presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    /// Build the session record for `role`, named with the role's placeholder.
    pub fn into_session_user(self, role: Role) -> Result<SessionUser, AppError> {
        self.validate()?;
        Ok(SessionUser::new(role.placeholder_name(), self.email, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn login_builds_placeholder_user_for_each_role() {
        for role in Role::ALL {
            let user = login("demo@groupdeliver.com", "demo123")
                .into_session_user(role)
                .unwrap();
            assert_eq!(user.role, role);
            assert_eq!(user.name, role.placeholder_name());
            assert_eq!(user.email, "demo@groupdeliver.com");
            assert!(!user.id.is_empty());
        }
    }

    #[test]
    fn login_accepts_any_non_empty_pair() {
        assert!(login("x", "y").into_session_user(Role::Admin).is_ok());
    }

    #[test]
    fn login_rejects_empty_fields() {
        let err = login("", "").into_session_user(Role::Vendor).unwrap_err();
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
    }

    #[test]
    fn stored_layout_has_four_fields() {
        let user = SessionUser {
            id: "1".into(),
            name: "John Vendor".into(),
            email: "a@b.c".into(),
            role: Role::Vendor,
        };
        let value: serde_json::Value = serde_json::from_str(&user.encode().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "1", "name": "John Vendor", "email": "a@b.c", "role": "vendor"})
        );
    }

    #[test]
    fn restore_from_stored_record() {
        let raw = r#"{"id":"1","name":"Jane Supplier","email":"j@s.in","role":"supplier"}"#;
        let state = SessionState::from_stored(Some(raw));
        assert_eq!(state.display_name(), "Jane Supplier");
        assert_eq!(state.role(), Some(Role::Supplier));
    }

    #[test]
    fn missing_or_malformed_record_is_anonymous() {
        assert_eq!(SessionState::from_stored(None), SessionState::Anonymous);
        assert_eq!(SessionState::from_stored(Some("{oops")), SessionState::Anonymous);
        assert_eq!(SessionState::from_stored(Some("{}")), SessionState::Anonymous);
        assert_eq!(SessionState::Anonymous.display_name(), "");
    }

    #[test]
    fn authenticate_overwrites_previous_user() {
        let mut state = SessionState::Anonymous;
        state.authenticate(SessionUser::new("John Vendor", "a@b.c", Role::Vendor));
        state.authenticate(SessionUser::new("Admin User", "root@b.c", Role::Admin));
        let user = state.user().unwrap();
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.email, "root@b.c");
        assert_eq!(user.role, Role::Admin);
    }
}
