//! Application error taxonomy and HTTP mapping.
//!
//! Every error is terminal for the request that produced it and carries the
//! user-visible message rendered in the response.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Status block returned to clients when a request fails.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, malformed, or oversized user input.
    #[error("{0}")]
    Validation(String),

    /// The provider rejected our API credentials.
    #[error("{0}")]
    Auth(String),

    /// The configured domain has no matching zone at the provider.
    #[error("{0}")]
    Config(String),

    /// Any other unexpected provider response or transport failure.
    #[error("{message}")]
    Provider {
        message: String,
        upstream_status: Option<u16>,
    },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn provider(message: impl Into<String>, upstream_status: Option<u16>) -> Self {
        Self::Provider {
            message: message.into(),
            upstream_status,
        }
    }

    /// HTTP status surfaced to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) | AppError::Config(_) | AppError::Provider { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Stable machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Auth(_) => "auth_error",
            AppError::Config(_) => "config_error",
            AppError::Provider { .. } => "provider_error",
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.status_code().as_u16(),
            message: self.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "request body rejected");
        AppError::validation(crate::utils::url_validator::MSG_MISSING_URL)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}
