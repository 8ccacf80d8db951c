//! Outcome of a single shortening request.

use serde::Serialize;

use crate::error::AppError;

pub const MSG_ALREADY_EXISTS: &str = "URL already exists.";
pub const MSG_CREATED: &str = "TXT record created successfully.";

/// Status block rendered once per request: a status code, a human-readable
/// message and, on success, the short URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenOutcome {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

impl ShortenOutcome {
    /// The URL was already published under its short code.
    pub fn already_exists(short_url: String) -> Self {
        Self {
            code: 201,
            message: MSG_ALREADY_EXISTS.to_string(),
            short_url: Some(short_url),
        }
    }

    /// A new TXT record was created.
    pub fn created(short_url: String) -> Self {
        Self {
            code: 201,
            message: MSG_CREATED.to_string(),
            short_url: Some(short_url),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 201
    }
}

impl From<AppError> for ShortenOutcome {
    fn from(err: AppError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            message: err.to_string(),
            short_url: None,
        }
    }
}
