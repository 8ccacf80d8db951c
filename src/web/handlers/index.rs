//! Shortener form page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::info;

use crate::domain::entities::ShortenOutcome;
use crate::state::AppState;

/// Form submission with a single `url` field.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Status block shown below the form.
pub struct StatusBlock {
    pub code: u16,
    pub message: String,
    pub short_url: Option<String>,
    pub success: bool,
}

impl From<ShortenOutcome> for StatusBlock {
    fn from(outcome: ShortenOutcome) -> Self {
        Self {
            code: outcome.code,
            success: outcome.is_success(),
            message: outcome.message,
            short_url: outcome.short_url,
        }
    }
}

/// Template for the shortener page.
///
/// Renders `templates/index.html`; message and short URL are HTML-escaped
/// by Askama.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub status: Option<StatusBlock>,
}

/// Renders the empty form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate { status: None }
}

/// Processes a form submission and renders the page with its status block.
///
/// # Endpoint
///
/// `POST /`
///
/// The page is always served with `200 OK`; the outcome code is part of the
/// rendered status block.
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> impl IntoResponse {
    let outcome = state
        .shortener
        .shorten(&form.url)
        .await
        .unwrap_or_else(|e| {
            info!(kind = e.kind(), message = %e, "form submission failed");
            ShortenOutcome::from(e)
        });

    IndexTemplate {
        status: Some(outcome.into()),
    }
}
