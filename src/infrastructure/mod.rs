//! Infrastructure layer implementing the domain ports.
//!
//! - [`provider`] - DNS provider management API (IONOS)
//! - [`dns`] - Public DNS TXT lookups (hickory)

pub mod dns;
pub mod provider;

pub use dns::HickoryTxtResolver;
pub use provider::IonosClient;
