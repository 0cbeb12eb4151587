//! Health domain - Status reporting for the running service

mod entity;
mod repository;

pub use entity::{HealthCheck, HealthStatus};
pub use repository::HealthRepository;

#[cfg(test)]
pub use repository::mock::MockHealthRepository;
