//! DTOs for the link shortening endpoint.

use serde::Deserialize;

/// Request to shorten a single URL.
///
/// A missing `url` field is treated like an empty one.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}
