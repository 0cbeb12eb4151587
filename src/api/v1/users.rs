//! User endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;

/// Response payload for a resolved user
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: String,
}

impl UserResponse {
    pub fn from_domain(user: &User) -> Self {
        Self {
            user: user.username().to_string(),
        }
    }
}

/// GET /api/v1/user/:username
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(username = %username, "Resolving user");

    let user = state
        .get_user_use_case
        .execute(&username)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from_domain(&user)))
}
