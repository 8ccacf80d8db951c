//! Short link creation through DNS TXT records.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{NewTxtRecord, ShortCode, ShortenOutcome};
use crate::domain::ports::{DnsProvider, TxtResolver};
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

pub const MSG_INVALID_TOKEN: &str = "Invalid API token.";
pub const MSG_INVALID_SHORT_CODE: &str = "Invalid short code.";

/// Service that publishes URLs as TXT records under a managed domain.
///
/// Every call is independent: the DNS system is the only datastore, zones
/// are fetched fresh per request, and no external call is retried.
///
/// The check-then-create sequence is not atomic. Two concurrent first-time
/// submissions of one URL may both create a record; the content is identical
/// so the race is benign.
pub struct ShortenerService {
    provider: Arc<dyn DnsProvider>,
    resolver: Arc<dyn TxtResolver>,
    domain: String,
}

impl ShortenerService {
    /// Creates a new shortener for `domain`.
    pub fn new(
        provider: Arc<dyn DnsProvider>,
        resolver: Arc<dyn TxtResolver>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            resolver,
            domain: domain.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Shortens `raw_url`, creating a TXT record at `{code}.{domain}` if needed.
    ///
    /// # Flow
    ///
    /// 1. Trim and validate the URL
    /// 2. Derive the short code from `md5(url)`
    /// 3. If the first TXT record at `{code}.{domain}` already equals the URL,
    ///    return "already exists" without calling the provider
    /// 4. Find the zone of the configured domain
    /// 5. Create the TXT record (TTL 60s)
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for missing, malformed, or oversized URLs
    /// - [`AppError::Auth`] if the provider rejects the token (401)
    /// - [`AppError::Config`] if no zone matches the domain
    /// - [`AppError::Provider`] for any other provider status or transport failure
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortenOutcome, AppError> {
        let url = validate_url(raw_url)?;
        let code = ShortCode::from_url(url);
        let short_url = code.short_url(&self.domain);

        if self.is_published(&code, url).await {
            info!(code = %code, "URL already published");
            return Ok(ShortenOutcome::already_exists(short_url));
        }

        let zone_id = self.find_zone_id().await?;

        let record = NewTxtRecord::for_short_code(&code, url);
        let status = self
            .provider
            .create_record(&zone_id, &record)
            .await
            .map_err(|e| {
                warn!(code = %code, error = %e, "TXT record creation failed");
                AppError::provider(format!("Error creating DNS record ({e})."), None)
            })?;

        match status {
            200 | 201 => {
                info!(code = %code, zone_id = %zone_id, "TXT record created");
                Ok(ShortenOutcome::created(short_url))
            }
            other => {
                warn!(code = %code, status = other, "provider rejected TXT record");
                Err(AppError::provider(
                    format!("Error creating DNS record (HTTP {other})."),
                    Some(other),
                ))
            }
        }
    }

    /// Looks up the URL published under `code`.
    ///
    /// Returns the content of the first TXT record at `{code}.{domain}`, or
    /// `None` if nothing resolves. Lookup failures are reported as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` is not 6 lowercase hex characters.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        let code =
            ShortCode::parse(code.trim()).ok_or_else(|| AppError::validation(MSG_INVALID_SHORT_CODE))?;

        Ok(self.first_txt_record(&code).await)
    }

    /// True iff the first TXT record at `{code}.{domain}` equals `url` exactly.
    async fn is_published(&self, code: &ShortCode, url: &str) -> bool {
        self.first_txt_record(code)
            .await
            .is_some_and(|content| content == url)
    }

    async fn first_txt_record(&self, code: &ShortCode) -> Option<String> {
        let hostname = code.record_name(&self.domain);

        match self.resolver.lookup_txt(&hostname).await {
            Ok(records) => records.into_iter().next(),
            Err(e) => {
                // NXDOMAIN, timeouts and empty answers all mean "not published yet"
                debug!(hostname = %hostname, error = %e, "no TXT record found");
                None
            }
        }
    }

    /// Returns the provider zone id for the configured domain.
    async fn find_zone_id(&self) -> Result<String, AppError> {
        let listing = self.provider.list_zones().await.map_err(|e| {
            warn!(error = %e, "zone listing failed");
            AppError::provider(format!("Cannot retrieve zones ({e})."), None)
        })?;

        match listing.status {
            200 => {}
            401 => {
                warn!("provider rejected API token");
                return Err(AppError::auth(MSG_INVALID_TOKEN));
            }
            other => {
                warn!(status = other, "unexpected status listing zones");
                return Err(AppError::provider(
                    format!("Cannot retrieve zones (HTTP {other})."),
                    Some(other),
                ));
            }
        }

        listing
            .find_zone_id(&self.domain)
            .map(str::to_string)
            .ok_or_else(|| {
                warn!(domain = %self.domain, zones = listing.zones.len(), "zone not found");
                AppError::config(format!(
                    "Zone not found in IONOS for domain {}.",
                    self.domain
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Zone, ZoneListing};
    use crate::domain::ports::{
        MockDnsProvider, MockTxtResolver, ProviderError, ResolveError,
    };

    const DOMAIN: &str = "s.example.com";
    const URL: &str = "https://example.com/page";
    const CODE: &str = "fb37c0";

    fn zone(id: &str, name: &str) -> Zone {
        Zone {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn nxdomain(hostname: &str) -> ResolveError {
        ResolveError {
            hostname: hostname.to_string(),
            reason: "no record found".to_string(),
        }
    }

    fn resolver_without_records() -> MockTxtResolver {
        let mut resolver = MockTxtResolver::new();
        resolver
            .expect_lookup_txt()
            .times(1)
            .returning(|hostname| Err(nxdomain(hostname)));
        resolver
    }

    fn service(provider: MockDnsProvider, resolver: MockTxtResolver) -> ShortenerService {
        ShortenerService::new(Arc::new(provider), Arc::new(resolver), DOMAIN)
    }

    #[tokio::test]
    async fn test_shorten_missing_url() {
        let result = service(MockDnsProvider::new(), MockTxtResolver::new())
            .shorten("   ")
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Missing URL.");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let result = service(MockDnsProvider::new(), MockTxtResolver::new())
            .shorten("not a url")
            .await;

        assert_eq!(result.unwrap_err().to_string(), "Invalid URL format.");
    }

    #[tokio::test]
    async fn test_shorten_already_exists_skips_provider() {
        let mut resolver = MockTxtResolver::new();
        resolver
            .expect_lookup_txt()
            .withf(|hostname| hostname == "fb37c0.s.example.com")
            .times(1)
            .returning(|_| Ok(vec![URL.to_string()]));

        let mut provider = MockDnsProvider::new();
        provider.expect_list_zones().times(0);
        provider.expect_create_record().times(0);

        let outcome = service(provider, resolver).shorten(URL).await.unwrap();

        assert_eq!(outcome.code, 201);
        assert_eq!(outcome.message, "URL already exists.");
        assert_eq!(
            outcome.short_url.as_deref(),
            Some("https://s.example.com/fb37c0")
        );
    }

    #[tokio::test]
    async fn test_shorten_compares_trimmed_input() {
        let mut resolver = MockTxtResolver::new();
        resolver
            .expect_lookup_txt()
            .times(1)
            .returning(|_| Ok(vec![URL.to_string()]));

        let outcome = service(MockDnsProvider::new(), resolver)
            .shorten("  https://example.com/page  ")
            .await
            .unwrap();

        assert_eq!(outcome.message, "URL already exists.");
    }

    #[tokio::test]
    async fn test_shorten_only_first_record_counts() {
        let mut resolver = MockTxtResolver::new();
        resolver
            .expect_lookup_txt()
            .times(1)
            .returning(|_| Ok(vec!["https://collision.example".to_string(), URL.to_string()]));

        let mut provider = MockDnsProvider::new();
        provider
            .expect_list_zones()
            .times(1)
            .returning(|| Ok(ZoneListing::new(200, vec![zone("z-1", DOMAIN)])));
        provider
            .expect_create_record()
            .times(1)
            .returning(|_, _| Ok(201));

        let outcome = service(provider, resolver).shorten(URL).await.unwrap();
        assert_eq!(outcome.message, "TXT record created successfully.");
    }

    #[tokio::test]
    async fn test_shorten_creates_record() {
        let mut provider = MockDnsProvider::new();
        provider.expect_list_zones().times(1).returning(|| {
            Ok(ZoneListing::new(
                200,
                vec![zone("z-other", "other.com"), zone("z-1", DOMAIN)],
            ))
        });
        provider
            .expect_create_record()
            .withf(|zone_id, record| {
                zone_id == "z-1"
                    && record.name == CODE
                    && record.record_type == "TXT"
                    && record.content == URL
                    && record.ttl == 60
            })
            .times(1)
            .returning(|_, _| Ok(201));

        let outcome = service(provider, resolver_without_records())
            .shorten(URL)
            .await
            .unwrap();

        assert_eq!(outcome.code, 201);
        assert_eq!(outcome.message, "TXT record created successfully.");
        assert_eq!(
            outcome.short_url.as_deref(),
            Some("https://s.example.com/fb37c0")
        );
    }

    #[tokio::test]
    async fn test_shorten_accepts_200_on_create() {
        let mut provider = MockDnsProvider::new();
        provider
            .expect_list_zones()
            .returning(|| Ok(ZoneListing::new(200, vec![zone("z-1", DOMAIN)])));
        provider.expect_create_record().returning(|_, _| Ok(200));

        let outcome = service(provider, resolver_without_records())
            .shorten(URL)
            .await
            .unwrap();

        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_shorten_stale_record_content_creates_new() {
        let mut resolver = MockTxtResolver::new();
        resolver
            .expect_lookup_txt()
            .returning(|_| Ok(vec!["https://example.com/page/".to_string()]));

        let mut provider = MockDnsProvider::new();
        provider
            .expect_list_zones()
            .times(1)
            .returning(|| Ok(ZoneListing::new(200, vec![zone("z-1", DOMAIN)])));
        provider
            .expect_create_record()
            .times(1)
            .returning(|_, _| Ok(201));

        let outcome = service(provider, resolver).shorten(URL).await.unwrap();
        assert_eq!(outcome.message, "TXT record created successfully.");
    }

    #[tokio::test]
    async fn test_shorten_invalid_token() {
        let mut provider = MockDnsProvider::new();
        provider
            .expect_list_zones()
            .times(1)
            .returning(|| Ok(ZoneListing::new(401, vec![])));
        provider.expect_create_record().times(0);

        let err = service(provider, resolver_without_records())
            .shorten(URL)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Auth(_)));
        assert_eq!(err.status_code().as_u16(), 401);
        assert_eq!(err.to_string(), "Invalid API token.");
    }

    #[tokio::test]
    async fn test_shorten_zone_listing_unexpected_status() {
        let mut provider = MockDnsProvider::new();
        provider
            .expect_list_zones()
            .returning(|| Ok(ZoneListing::new(503, vec![])));
        provider.expect_create_record().times(0);

        let err = service(provider, resolver_without_records())
            .shorten(URL)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Provider {
                upstream_status: Some(503),
                ..
            }
        ));
        assert_eq!(err.to_string(), "Cannot retrieve zones (HTTP 503).");
        assert_eq!(err.status_code().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_shorten_zone_listing_transport_failure() {
        let mut provider = MockDnsProvider::new();
        provider
            .expect_list_zones()
            .returning(|| Err(ProviderError::Transport("connection refused".to_string())));

        let err = service(provider, resolver_without_records())
            .shorten(URL)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Provider {
                upstream_status: None,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Cannot retrieve zones ("));
    }

    #[tokio::test]
    async fn test_shorten_zone_not_found() {
        let mut provider = MockDnsProvider::new();
        provider
            .expect_list_zones()
            .returning(|| Ok(ZoneListing::new(200, vec![zone("z-1", "example.com")])));
        provider.expect_create_record().times(0);

        let err = service(provider, resolver_without_records())
            .shorten(URL)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Zone not found in IONOS for domain s.example.com."
        );
    }

    #[tokio::test]
    async fn test_shorten_record_creation_rejected() {
        let mut provider = MockDnsProvider::new();
        provider
            .expect_list_zones()
            .returning(|| Ok(ZoneListing::new(200, vec![zone("z-1", DOMAIN)])));
        provider
            .expect_create_record()
            .times(1)
            .returning(|_, _| Ok(422));

        let err = service(provider, resolver_without_records())
            .shorten(URL)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error creating DNS record (HTTP 422).");
        assert_eq!(err.status_code().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_resolve_returns_first_record() {
        let mut resolver = MockTxtResolver::new();
        resolver
            .expect_lookup_txt()
            .withf(|hostname| hostname == "fb37c0.s.example.com")
            .returning(|_| Ok(vec![URL.to_string(), "https://second.example".to_string()]));

        let url = service(MockDnsProvider::new(), resolver)
            .resolve(CODE)
            .await
            .unwrap();

        assert_eq!(url.as_deref(), Some(URL));
    }

    #[tokio::test]
    async fn test_resolve_missing_record() {
        let url = service(MockDnsProvider::new(), resolver_without_records())
            .resolve(CODE)
            .await
            .unwrap();

        assert!(url.is_none());
    }

    #[tokio::test]
    async fn test_resolve_rejects_invalid_code() {
        let err = service(MockDnsProvider::new(), MockTxtResolver::new())
            .resolve("../etc")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid short code.");
    }
}
