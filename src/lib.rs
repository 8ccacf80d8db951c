//! # DNS URL Shortener
//!
//! Publishes short links as DNS TXT records. A submitted URL is hashed into a
//! 6-character code and stored as a TXT record at `{code}.{domain}` through
//! the IONOS DNS API; the short URL is `https://{domain}/{code}`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short codes, zones, records, and collaborator traits
//! - **Application Layer** ([`application`]) - The shortening workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - IONOS API client and DNS resolver
//! - **API Layer** ([`api`]) - JSON API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML form
//!
//! ## Quick Start
//!
//! ```bash
//! export DOMAIN="s.example.com"
//! export IONOS_API_TOKEN="prefix.secret"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{NewTxtRecord, ShortCode, ShortenOutcome, Zone};
    pub use crate::domain::ports::{DnsProvider, TxtResolver};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
