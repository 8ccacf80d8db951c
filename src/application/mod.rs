//! Application layer services implementing business logic.
//!
//! Services orchestrate the domain ports (DNS provider, DNS resolver) and
//! provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short link creation and lookup

pub mod services;
