#![allow(dead_code)]

use async_trait::async_trait;
use dns_url_shortener::application::services::ShortenerService;
use dns_url_shortener::domain::ports::{ResolveError, TxtResolver};
use dns_url_shortener::infrastructure::IonosClient;
use dns_url_shortener::state::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DOMAIN: &str = "s.example.com";
pub const TOKEN: &str = "test-token";
pub const ZONE_ID: &str = "11af3414-ebba-11e9-8df5-66fbe8a334b4";

/// In-memory TXT records keyed by host name. Unknown names fail like NXDOMAIN.
#[derive(Default, Clone)]
pub struct StaticTxtResolver {
    records: HashMap<String, Vec<String>>,
}

impl StaticTxtResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, hostname: &str, content: &str) -> Self {
        self.records
            .entry(hostname.to_string())
            .or_default()
            .push(content.to_string());
        self
    }
}

#[async_trait]
impl TxtResolver for StaticTxtResolver {
    async fn lookup_txt(&self, hostname: &str) -> Result<Vec<String>, ResolveError> {
        self.records
            .get(hostname)
            .cloned()
            .ok_or_else(|| ResolveError {
                hostname: hostname.to_string(),
                reason: "no record found".to_string(),
            })
    }
}

pub fn create_test_client(base_url: &str) -> IonosClient {
    IonosClient::builder(base_url, TOKEN).build().unwrap()
}

pub fn create_test_service(base_url: &str, resolver: StaticTxtResolver) -> ShortenerService {
    ShortenerService::new(
        Arc::new(create_test_client(base_url)),
        Arc::new(resolver),
        DOMAIN,
    )
}

pub fn create_test_state(base_url: &str, resolver: StaticTxtResolver) -> AppState {
    AppState::new(Arc::new(create_test_service(base_url, resolver)))
}

/// Mounts a zone listing that contains the test domain.
pub async fn mount_zones(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "other-zone", "name": "example.org", "type": "NATIVE" },
            { "id": ZONE_ID, "name": DOMAIN, "type": "NATIVE" }
        ])))
        .mount(server)
        .await;
}

/// Mounts a record creation endpoint for the test zone answering `status`.
pub async fn mount_create_record(server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/zones/{ZONE_ID}/records")))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!([])))
        .expect(expected_calls)
        .mount(server)
        .await;
}
