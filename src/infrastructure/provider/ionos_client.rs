//! IONOS DNS API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use crate::domain::entities::{NewTxtRecord, Zone, ZoneListing};
use crate::domain::ports::{DnsProvider, ProviderError};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every provider request.
pub const USER_AGENT: &str = "DNS-URL-Shortener/1.0";

/// [`DnsProvider`] backed by the IONOS DNS HTTP API.
///
/// Authenticates with `Authorization: Bearer {token}`. Every call is made
/// exactly once; there is no retry logic.
#[derive(Clone)]
pub struct IonosClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl IonosClient {
    /// Create a builder for custom configuration
    pub fn builder(base_url: impl Into<String>, token: impl Into<String>) -> IonosClientBuilder {
        IonosClientBuilder::new(base_url, token)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl DnsProvider for IonosClient {
    async fn list_zones(&self) -> Result<ZoneListing, ProviderError> {
        let url = self.endpoint("/zones");
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            debug!(status, "zone listing returned non-200 status");
            return Ok(ZoneListing::new(status, Vec::new()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        let zones: Vec<Zone> =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        debug!(zones = zones.len(), "zones listed");
        Ok(ZoneListing::new(status, zones))
    }

    async fn create_record(
        &self,
        zone_id: &str,
        record: &NewTxtRecord,
    ) -> Result<u16, ProviderError> {
        let url = self.endpoint(&format!("/zones/{zone_id}/records"));
        debug!(url = %url, name = %record.name, "POST request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&[record])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "record creation rejected");
        }

        Ok(status.as_u16())
    }
}

/// Builder for configuring an [`IonosClient`]
pub struct IonosClientBuilder {
    base_url: String,
    token: String,
    timeout: Duration,
    user_agent: String,
}

impl IonosClientBuilder {
    /// Create a new builder for the given API base URL and token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Client`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<IonosClient, ProviderError> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(IonosClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            token: self.token,
        })
    }
}
