//! Application layer - Use cases orchestrating the domain

mod get_user;
mod health_check;

pub use get_user::GetUserUseCase;
pub use health_check::{HealthCheckUseCase, HealthReport};
