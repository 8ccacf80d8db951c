//! Port for read-side DNS TXT lookups.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
#[error("TXT lookup for {hostname} failed: {reason}")]
pub struct ResolveError {
    pub hostname: String,
    pub reason: String,
}

/// Resolves TXT records against the public DNS system.
///
/// Results are subject to propagation delay and intermediate caching; a
/// freshly created record may not be visible yet.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::HickoryTxtResolver`] - system resolver via hickory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TxtResolver: Send + Sync {
    /// Returns the TXT records at `hostname`, one string per record, in the
    /// order the resolver returned them.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] on NXDOMAIN, timeouts, or any other lookup failure.
    async fn lookup_txt(&self, hostname: &str) -> Result<Vec<String>, ResolveError>;
}
