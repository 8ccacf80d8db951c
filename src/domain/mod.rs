//! Domain layer containing the short-link model and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Short codes, zones, TXT records, request outcomes
//! - [`ports`] - Traits for the DNS provider API and the DNS resolver
//!
//! The DNS system itself plays the role of the datastore: a short link
//! exists iff `{code}.{domain}` carries a TXT record equal to the URL.

pub mod entities;
pub mod ports;
