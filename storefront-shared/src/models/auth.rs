//! Request and response bodies of the auth endpoints.

use serde::{Deserialize, Serialize};

use super::User;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain-text password; only ever sent over the wire.
    pub password: String,
}

impl LoginRequest {
    /// Build a request from form values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be filled before the form can be submitted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
}

/// Payload returned by the auth endpoints on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// The account that signed in.
    pub user: User,
    /// Bearer token for subsequent requests.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn login_request_wire_shape() {
        let request = LoginRequest::new("admin@marketplace.com", "admin123");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "admin@marketplace.com", "password": "admin123"})
        );
    }

    #[test]
    fn login_request_completeness() {
        assert!(!LoginRequest::default().is_complete());
        assert!(!LoginRequest::new("   ", "secret").is_complete());
        assert!(!LoginRequest::new("a@b.c", "").is_complete());
        assert!(LoginRequest::new("a@b.c", "secret").is_complete());
    }

    #[test]
    fn auth_response_from_api() {
        let json = r#"{"user":{"id":1,"email":"cliente@marketplace.com","role":"CUSTOMER"},"token":"abc.def"}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.token, "abc.def");
        assert_eq!(auth.user.role, UserRole::Customer);
    }
}
