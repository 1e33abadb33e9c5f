//! Cross-cutting traits.

use async_trait::async_trait;
use serde::Serialize;

/// Health of a backing dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded(String),
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true only for `Healthy`.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Components that can report their own health.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Component name used in health reports.
    fn name(&self) -> &'static str;

    /// Probes the component.
    async fn check(&self) -> HealthStatus;
}
