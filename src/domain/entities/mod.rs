//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ShortCode`] - 6-hex-character label derived from a URL
//! - [`Zone`] / [`ZoneListing`] - Provider zones and the raw listing result
//! - [`NewTxtRecord`] - TXT record payload mapping a code to a URL
//! - [`ShortenOutcome`] - Status block produced once per request

pub mod outcome;
pub mod short_code;
pub mod txt_record;
pub mod zone;

pub use outcome::ShortenOutcome;
pub use short_code::ShortCode;
pub use txt_record::NewTxtRecord;
pub use zone::{Zone, ZoneListing};
