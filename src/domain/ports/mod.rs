//! Trait definitions for the external collaborators of the domain.
//!
//! Implementations live in `crate::infrastructure`; mock implementations are
//! generated via `mockall` for unit tests.
//!
//! - [`DnsProvider`] - Zone listing and record creation at the provider
//! - [`TxtResolver`] - Public DNS TXT lookups

pub mod dns_provider;
pub mod txt_resolver;

pub use dns_provider::{DnsProvider, ProviderError};
pub use txt_resolver::{ResolveError, TxtResolver};

#[cfg(test)]
pub use dns_provider::MockDnsProvider;
#[cfg(test)]
pub use txt_resolver::MockTxtResolver;
