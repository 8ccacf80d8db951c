//! Short code derived from a URL's MD5 digest.

use std::fmt;

/// Number of hex characters kept from the digest.
pub const SHORT_CODE_LEN: usize = 6;

/// A 6-character lowercase hex code used as the DNS label of a short link.
///
/// Codes are not unique: two distinct URLs sharing the same digest prefix
/// map to the same code, and whichever record was created first wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Derives the code as the first 6 hex characters of `md5(url)`.
    pub fn from_url(url: &str) -> Self {
        let digest = md5::compute(url.as_bytes());
        let mut hex = hex::encode(digest.0);
        hex.truncate(SHORT_CODE_LEN);
        Self(hex)
    }

    /// Parses a user-supplied code. Returns `None` unless it is exactly
    /// 6 lowercase hex characters.
    pub fn parse(input: &str) -> Option<Self> {
        let valid = input.len() == SHORT_CODE_LEN
            && input
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        valid.then(|| Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fully qualified name of the TXT record: `{code}.{domain}`.
    pub fn record_name(&self, domain: &str) -> String {
        format!("{}.{}", self.0, domain)
    }

    /// Public short URL: `https://{domain}/{code}`.
    pub fn short_url(&self, domain: &str) -> String {
        format!("https://{}/{}", domain.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
