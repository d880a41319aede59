//! Health responses

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    /// `healthy`, `unhealthy`, or `in_memory` when no database is configured
    pub database: String,
}

impl ReadinessResponse {
    /// `database_healthy` is `None` when the stores are in memory
    pub fn ready(database_healthy: Option<bool>) -> Self {
        let (ready, database) = match database_healthy {
            Some(true) => (true, "healthy"),
            Some(false) => (false, "unhealthy"),
            None => (true, "in_memory"),
        };
        Self {
            status: if ready { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: database.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
