//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed
//! explicitly into the services that need it.
//!
//! ```bash
//! export DOMAIN="s.example.com"
//! export IONOS_API_URL="https://api.hosting.ionos.com/dns/v1"
//! export IONOS_API_TOKEN="prefix.secret"
//! ```
//!
//! ## Required Variables
//!
//! - `DOMAIN` - Domain whose zone receives the TXT records
//! - `IONOS_API_TOKEN` - Bearer token for the provider API
//!
//! ## Optional Variables
//!
//! - `IONOS_API_URL` - Provider API base URL (default: `https://api.hosting.ionos.com/dns/v1`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_TIMEOUT_SECONDS` - Provider request timeout (default: 30, max: 300)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Default base URL of the IONOS DNS API.
pub const DEFAULT_PROVIDER_API_URL: &str = "https://api.hosting.ionos.com/dns/v1";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Managed domain, e.g. `s.example.com`. Short URLs are `https://{domain}/{code}`.
    pub domain: String,
    pub provider_api_url: String,
    /// Never logged; see [`Config::print_summary`].
    pub provider_api_token: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub http_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DOMAIN` or `IONOS_API_TOKEN` is missing.
    pub fn from_env() -> Result<Self> {
        let domain = env::var("DOMAIN")
            .context("DOMAIN must be set")?
            .trim()
            .to_string();

        let provider_api_url =
            env::var("IONOS_API_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_API_URL.to_string());

        let provider_api_token = env::var("IONOS_API_TOKEN")
            .context("IONOS_API_TOKEN must be set")?
            .trim()
            .to_string();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            domain,
            provider_api_url,
            provider_api_token,
            listen_addr,
            log_level,
            log_format,
            http_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `domain` is empty or looks like a URL instead of a host name
    /// - `provider_api_url` is not an HTTP(S) URL
    /// - `provider_api_token` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `http_timeout_seconds` is outside 1..=300
    pub fn validate(&self) -> Result<()> {
        if self.domain.is_empty() {
            anyhow::bail!("DOMAIN must not be empty");
        }

        if self.domain.contains("://") || self.domain.contains('/') {
            anyhow::bail!(
                "DOMAIN must be a bare host name (e.g. 's.example.com'), got '{}'",
                self.domain
            );
        }

        if !self.provider_api_url.starts_with("https://")
            && !self.provider_api_url.starts_with("http://")
        {
            anyhow::bail!(
                "IONOS_API_URL must start with 'http://' or 'https://', got '{}'",
                self.provider_api_url
            );
        }

        if self.provider_api_token.is_empty() {
            anyhow::bail!("IONOS_API_TOKEN must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        Ok(())
    }

    /// Timeout applied to every provider API request.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Domain: {}", self.domain);
        tracing::info!("  Provider API: {}", self.provider_api_url);
        tracing::info!("  Provider token: {}", mask_token(&self.provider_api_token));
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks an API token for logging, keeping at most the first four characters.
///
/// - `abcdef123456` → `abcd***`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        return "***".to_string();
    }

    let visible: String = token.chars().take(4).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
