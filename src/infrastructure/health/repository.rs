//! In-memory health repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::health::{HealthCheck, HealthRepository, HealthStatus};
use crate::domain::DomainError;

/// In-memory implementation of HealthRepository
///
/// Nothing backs this repository, so it always reports healthy. The
/// timestamp is stamped from the injected clock at probe time.
#[derive(Debug)]
pub struct InMemoryHealthRepository {
    clock: Arc<dyn Clock>,
}

impl InMemoryHealthRepository {
    /// Create a new repository stamping timestamps from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl HealthRepository for InMemoryHealthRepository {
    async fn get_health_status(&self) -> Result<HealthCheck, DomainError> {
        Ok(HealthCheck::new(HealthStatus::Healthy).with_timestamp(self.clock.now()))
    }
}
