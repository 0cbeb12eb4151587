//! Health check entity and status enumeration

use serde::{Deserialize, Serialize};

/// Health status of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    /// Wire value of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
        }
    }
}

/// Point-in-time health report
///
/// Freshly constructed per request and never stored. The timestamp is an
/// ISO-8601 instant; when absent, the consuming use case stamps one at
/// response-construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl HealthCheck {
    /// Create a health check without a timestamp
    pub fn new(status: HealthStatus) -> Self {
        Self {
            status,
            timestamp: None,
        }
    }

    /// Attach a timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}
