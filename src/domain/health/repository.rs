//! Health repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::HealthCheck;
use crate::domain::error::DomainError;

/// Repository for health status reporting
///
/// Implementations report liveness of whatever backs them. The in-memory
/// implementation is always healthy; a future database-backed one would
/// probe its connection here.
#[async_trait]
pub trait HealthRepository: Send + Sync + Debug {
    /// Current health status, optionally carrying the instant it was taken
    async fn get_health_status(&self) -> Result<HealthCheck, DomainError>;
}
