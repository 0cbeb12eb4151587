//! Domain layer - Core business logic and entities

pub mod clock;
pub mod error;
pub mod health;
pub mod user;

pub use clock::Clock;
pub use error::DomainError;
pub use health::{HealthCheck, HealthRepository, HealthStatus};
pub use user::{validate_username, User, UserRepository, Username, UserValidationError};
