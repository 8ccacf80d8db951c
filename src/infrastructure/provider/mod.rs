//! DNS provider API clients.

pub mod ionos_client;

pub use ionos_client::{IonosClient, IonosClientBuilder};
