//! Use case for reporting service health

use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::health::{HealthRepository, HealthStatus};
use crate::domain::DomainError;

/// Completed health report
///
/// Unlike the repository's raw check, the timestamp here is always
/// present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    status: HealthStatus,
    timestamp: String,
}

impl HealthReport {
    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Reports the current health of the service
///
/// When the repository's check carries a timestamp it is kept as-is;
/// otherwise the clock stamps the instant the report was assembled.
#[derive(Debug)]
pub struct HealthCheckUseCase {
    health_repository: Arc<dyn HealthRepository>,
    clock: Arc<dyn Clock>,
}

impl HealthCheckUseCase {
    /// Create a new use case backed by the given repository and clock
    pub fn new(health_repository: Arc<dyn HealthRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            health_repository,
            clock,
        }
    }

    /// Produce a health report with a guaranteed timestamp
    pub async fn execute(&self) -> Result<HealthReport, DomainError> {
        let check = self.health_repository.get_health_status().await?;

        let timestamp = match check.timestamp() {
            Some(timestamp) => timestamp.to_string(),
            None => self.clock.now(),
        };

        Ok(HealthReport {
            status: check.status(),
            timestamp,
        })
    }
}
