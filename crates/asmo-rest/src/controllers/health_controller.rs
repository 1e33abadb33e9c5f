//! Health check controller.

use crate::state::AppState;
use asmo_core::HealthStatus;
use asmo_service::metrics::{operations, record_query};
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};
use utoipa::ToSchema;

/// Health check response.
///
/// The endpoint always answers 200; a failed database ping only flips
/// `status` to `degraded`. The cache never affects `status`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: String,
    pub message: String,
    /// `connected` or `disconnected`
    pub database: String,
    /// `connected` or `degraded`
    pub cache: String,
    pub version: String,
    pub timestamp: HealthTimestamp,
}

/// When and where the health check ran.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthTimestamp {
    pub server: String,
    pub unix: i64,
    pub iso: String,
    /// Database failure detail, only reported in development
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_error: Option<String>,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up; status reports database health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let started = Instant::now();
    let database = state.database.check().await;
    record_query(operations::PING, "health", started);

    let cache = if state.cache.is_connected() {
        "connected"
    } else {
        "degraded"
    };

    let now = Utc::now();
    let mut response = HealthResponse {
        status: "ok".to_string(),
        message: "Service is healthy".to_string(),
        database: "connected".to_string(),
        cache: cache.to_string(),
        version: state.app.version.clone(),
        timestamp: HealthTimestamp {
            server: "backend".to_string(),
            unix: now.timestamp(),
            iso: now.to_rfc3339(),
            db_error: None,
        },
    };

    match database {
        HealthStatus::Healthy => debug!("Health check: all systems operational"),
        HealthStatus::Degraded(reason) | HealthStatus::Unhealthy(reason) => {
            warn!(db_error = %reason, "Health check: degraded mode");
            response.status = "degraded".to_string();
            response.message = "Service is running but database is unavailable".to_string();
            response.database = "disconnected".to_string();
            if state.app.environment == "development" {
                response.timestamp.db_error = Some(reason);
            }
        }
    }

    Json(response)
}
