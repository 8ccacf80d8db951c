//! TXT lookups through the system resolver.

use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use hickory_resolver::proto::rr::rdata::TXT;
use tracing::debug;

use crate::domain::ports::{ResolveError, TxtResolver};

/// [`TxtResolver`] backed by `hickory-resolver` and the system configuration.
pub struct HickoryTxtResolver {
    resolver: TokioResolver,
}

impl HickoryTxtResolver {
    /// Creates a resolver from the system configuration (`/etc/resolv.conf`).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the system configuration cannot be read.
    pub fn from_system_conf() -> Result<Self, ResolveError> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| ResolveError {
                hostname: String::new(),
                reason: format!("failed to create resolver: {e}"),
            })?
            .build();

        Ok(Self { resolver })
    }
}

#[async_trait]
impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, hostname: &str) -> Result<Vec<String>, ResolveError> {
        debug!(hostname, "TXT lookup");

        let lookup = self
            .resolver
            .txt_lookup(hostname)
            .await
            .map_err(|e| ResolveError {
                hostname: hostname.to_string(),
                reason: e.to_string(),
            })?;

        Ok(lookup.iter().map(txt_content).collect())
    }
}

/// Joins the character-strings of a TXT record.
///
/// Values longer than 255 bytes travel as several strings and are
/// concatenated without separator.
fn txt_content(txt: &TXT) -> String {
    txt.txt_data()
        .iter()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect()
}
