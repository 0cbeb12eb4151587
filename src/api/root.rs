//! Root endpoint handler

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Welcome message payload
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET / - welcome message for humans poking at the service
pub async fn welcome() -> impl IntoResponse {
    let response = WelcomeResponse {
        message: "Welcome to the user directory API",
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_response_serialization() {
        let response = WelcomeResponse {
            message: "Welcome to the user directory API",
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"message\":\"Welcome to the user directory API\""));
    }
}
