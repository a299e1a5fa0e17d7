//! The `{success, message, data}` wrapper every API response uses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response envelope.
///
/// `data` is optional because failing responses usually omit it or send
/// `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Application-level outcome.
    pub success: bool,
    /// Human readable message from the server, shown verbatim on failure.
    #[serde(default)]
    pub message: String,
    /// Payload, present on success.
    pub data: Option<T>,
}

/// Application-level failure carried inside an envelope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiFailure {
    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The server answered `success: true` without a payload.
    #[error("response did not contain any data")]
    MissingData,
}

impl<T> ApiResponse<T> {
    /// A successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            data: Some(data),
        }
    }

    /// A failing envelope with the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Unwrap the payload, turning `success: false` into an error that keeps
    /// the server's message.
    ///
    /// # Errors
    /// [`ApiFailure::Rejected`] when `success` is false,
    /// [`ApiFailure::MissingData`] when a success carries no payload.
    pub fn into_result(self) -> Result<T, ApiFailure> {
        if !self.success {
            return Err(ApiFailure::Rejected(self.message));
        }
        self.data.ok_or(ApiFailure::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthResponse, Category};

    #[test]
    fn success_envelope_yields_data() {
        let json = r#"{"success":true,"message":"ok","data":[{"id":1,"nombre":"Ropa"}]}"#;
        let envelope: ApiResponse<Vec<Category>> = serde_json::from_str(json).unwrap();
        let categories = envelope.into_result().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Ropa");
    }

    #[test]
    fn failure_envelope_keeps_server_message() {
        let json = r#"{"success":false,"message":"Credenciales inválidas","data":null}"#;
        let envelope: ApiResponse<AuthResponse> = serde_json::from_str(json).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err, ApiFailure::Rejected("Credenciales inválidas".to_string()));
        assert_eq!(err.to_string(), "Credenciales inválidas");
    }

    #[test]
    fn failure_without_data_field() {
        let json = r#"{"success":false,"message":"Not found"}"#;
        let envelope: ApiResponse<Category> = serde_json::from_str(json).unwrap();
        assert!(matches!(envelope.into_result(), Err(ApiFailure::Rejected(m)) if m == "Not found"));
    }

    #[test]
    fn success_without_data_is_an_error() {
        let envelope: ApiResponse<Category> = serde_json::from_str(r#"{"success":true,"message":""}"#).unwrap();
        assert_eq!(envelope.into_result(), Err(ApiFailure::MissingData));
    }

    #[test]
    fn constructors() {
        assert_eq!(ApiResponse::ok(5).into_result(), Ok(5));
        assert_eq!(
            ApiResponse::<u8>::failure("nope").into_result(),
            Err(ApiFailure::Rejected("nope".into()))
        );
    }
}
