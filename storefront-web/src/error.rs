use shared::models::ApiFailure;
use thiserror::Error;

/// Everything that can go wrong talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable envelope.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The server answered `success: true` without data.
    #[error("response did not contain any data")]
    MissingData,
}

impl From<ApiFailure> for ApiError {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Rejected(message) => Self::Rejected(message),
            ApiFailure::MissingData => Self::MissingData,
        }
    }
}

impl ApiError {
    /// Text to show the visitor. Server messages are shown verbatim, anything
    /// else falls back to the localized generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected(message) if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the server explicitly refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
