//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use tracing::info;

use crate::api::dto::shorten::ShortenRequest;
use crate::domain::entities::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens one URL by publishing it as a DNS TXT record.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`, both for new records and for URLs already published:
///
/// ```json
/// {
///   "code": 201,
///   "message": "TXT record created successfully.",
///   "short_url": "https://s.example.com/fb37c0"
/// }
/// ```
///
/// # Errors
///
/// - 400 for invalid input, missing zone, or provider failures
/// - 401 if the provider rejects the API token
///
/// A body that is not a JSON object with a string `url` (wrong content type,
/// syntax error, wrong field type) is answered like a missing URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenOutcome>), AppError> {
    let Json(payload) = payload?;

    let outcome = state.shortener.shorten(&payload.url).await.inspect_err(|e| {
        info!(kind = e.kind(), message = %e, "shorten request failed");
    })?;

    Ok((StatusCode::CREATED, Json(outcome)))
}
