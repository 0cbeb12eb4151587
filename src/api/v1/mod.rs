//! Versioned API endpoints

pub mod health;
pub mod users;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/user/{username}", get(users::get_user))
        .route("/health", get(health::health_check))
}
