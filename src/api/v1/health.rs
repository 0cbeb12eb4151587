//! Health endpoint handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::application::HealthReport;

/// Response payload for the health report
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn from_report(report: &HealthReport) -> Self {
        Self {
            status: report.status().as_str().to_string(),
            timestamp: report.timestamp().to_string(),
        }
    }
}

/// GET /api/v1/health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let report = state
        .health_check_use_case
        .execute()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(HealthResponse::from_report(&report)))
}
