//! DTO for the health check endpoint.

use serde::Serialize;

/// Service liveness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub domain: String,
}
