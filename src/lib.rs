//! User directory API
//!
//! A small HTTP service that resolves users by username. Unknown
//! usernames are materialized on first lookup rather than rejected,
//! so every well-formed request resolves to a user.

pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use application::{GetUserUseCase, HealthCheckUseCase};
use domain::clock::Clock;
use domain::user::User;
use infrastructure::{InMemoryHealthRepository, InMemoryUserRepository, SystemClock};

/// Create the application state with all use cases wired up
///
/// Fails when a configured seed username is invalid.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let seed_users = config
        .users
        .seed
        .iter()
        .map(|username| User::new(username.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let user_repository = Arc::new(InMemoryUserRepository::with_users(seed_users));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let health_repository = Arc::new(InMemoryHealthRepository::new(clock.clone()));

    let get_user_use_case = Arc::new(GetUserUseCase::new(user_repository));
    let health_check_use_case = Arc::new(HealthCheckUseCase::new(health_repository, clock));

    Ok(AppState::new(get_user_use_case, health_check_use_case))
}
