//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, shorten_form_handler};
use axum::{Router, routing::get};

/// Public form routes.
///
/// # Endpoints
///
/// - `GET /` - Shortener form
/// - `POST /` - Form submission
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler).post(shorten_form_handler))
}
