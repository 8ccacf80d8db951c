//! Validation of user-submitted URLs.
//!
//! The accepted URL is the trimmed input, byte for byte. No normalization is
//! applied: the short code and the TXT content must match what was submitted.

use url::Url;

use crate::error::AppError;

/// Maximum accepted URL length in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

pub const MSG_MISSING_URL: &str = "Missing URL.";
pub const MSG_INVALID_URL: &str = "Invalid URL format.";
pub const MSG_URL_TOO_LONG: &str = "URL too long (max 2048 chars).";

/// Trims and validates a submitted URL, returning the trimmed slice.
///
/// # Rules (checked in order)
///
/// 1. Must not be empty after trimming
/// 2. Must be an absolute `scheme://host...` URL with no whitespace, control
///    characters, or backslashes
/// 3. Must be at most [`MAX_URL_LENGTH`] bytes
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the message of the first failed rule.
pub fn validate_url(input: &str) -> Result<&str, AppError> {
    let url = input.trim();

    if url.is_empty() {
        return Err(AppError::validation(MSG_MISSING_URL));
    }

    if url.chars().any(|c| c.is_whitespace() || c.is_control() || c == '\\') {
        return Err(AppError::validation(MSG_INVALID_URL));
    }

    let parsed = Url::parse(url).map_err(|_| AppError::validation(MSG_INVALID_URL))?;

    // The parser repairs `http:host` and `http:/host`; require the authority as typed.
    let has_authority = url
        .get(parsed.scheme().len() + 1..)
        .is_some_and(|rest| rest.starts_with("//"));

    if !has_authority || !parsed.host_str().is_some_and(|host| !host.is_empty()) {
        return Err(AppError::validation(MSG_INVALID_URL));
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(AppError::validation(MSG_URL_TOO_LONG));
    }

    Ok(url)
}
