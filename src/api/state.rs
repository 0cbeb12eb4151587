//! Application state for shared use cases

use std::sync::Arc;

use crate::application::{GetUserUseCase, HealthCheckUseCase};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub get_user_use_case: Arc<GetUserUseCase>,
    pub health_check_use_case: Arc<HealthCheckUseCase>,
}

impl AppState {
    pub fn new(
        get_user_use_case: Arc<GetUserUseCase>,
        health_check_use_case: Arc<HealthCheckUseCase>,
    ) -> Self {
        Self {
            get_user_use_case,
            health_check_use_case,
        }
    }
}
