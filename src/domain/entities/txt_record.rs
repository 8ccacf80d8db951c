//! TXT record payload sent to the provider.

use serde::Serialize;

use super::short_code::ShortCode;

/// TTL of created records, in seconds. Kept short for fast propagation.
pub const RECORD_TTL_SECONDS: u32 = 60;

/// Input data for creating a TXT record that maps a short code to a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTxtRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub content: String,
    pub ttl: u32,
}

impl NewTxtRecord {
    pub fn for_short_code(code: &ShortCode, url: &str) -> Self {
        Self {
            name: code.as_str().to_string(),
            record_type: "TXT",
            content: url.to_string(),
            ttl: RECORD_TTL_SECONDS,
        }
    }
}
