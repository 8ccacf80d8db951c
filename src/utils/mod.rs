//! Helper functions used across the application.
//!
//! - [`url_validator`] - Trimming and validation of submitted URLs

pub mod url_validator;
