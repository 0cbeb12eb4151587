//! Health check endpoint for liveness probes

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Probe response with the running version
#[derive(Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Simple health check - returns 200 if the service is running
///
/// Used for liveness probes. Reports nothing about dependencies; the
/// versioned API exposes the detailed health report.
pub async fn health_check() -> impl IntoResponse {
    let response = ProbeResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}
