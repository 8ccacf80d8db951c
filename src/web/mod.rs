//! Browser-facing layer.
//!
//! Serves the HTML form that submits URLs for shortening. Uses Askama
//! templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod routes;
