//! Port for the DNS provider's management API.

use crate::domain::entities::{NewTxtRecord, ZoneListing};
use async_trait::async_trait;

/// Failures that prevent a provider call from producing an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Management API of the third-party DNS provider.
///
/// Implementations authenticate themselves (bearer token) and report the raw
/// upstream HTTP status; interpreting the status is left to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::provider::IonosClient`] - IONOS DNS API over HTTPS
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Lists the zones visible to the configured token.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when no response was received or a 200
    /// response body could not be decoded.
    async fn list_zones(&self) -> Result<ZoneListing, ProviderError>;

    /// Creates one record in `zone_id` and returns the upstream HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] when no response was received.
    async fn create_record(&self, zone_id: &str, record: &NewTxtRecord)
    -> Result<u16, ProviderError>;
}
