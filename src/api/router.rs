use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::root;
use super::state::AppState;
use super::v1;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root welcome message
        .route("/", get(root::welcome))
        // Liveness probe (no state needed)
        .route("/health", get(health::health_check))
        // Versioned API
        .nest("/api/v1", v1::create_v1_router())
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
