//! Application state for Axum handlers.

use asmo_config::AppMetadata;
use asmo_core::{HealthCheck, Project, StaffMember};
use asmo_service::{CacheInterface, CatalogService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub web_projects: Arc<dyn CatalogService<Project>>,
    pub mobile_projects: Arc<dyn CatalogService<Project>>,
    pub bot_projects: Arc<dyn CatalogService<Project>>,
    pub staff: Arc<dyn CatalogService<StaffMember>>,
    pub database: Arc<dyn HealthCheck>,
    pub cache: Arc<dyn CacheInterface>,
    pub app: AppMetadata,
}
