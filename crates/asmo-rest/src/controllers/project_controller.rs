//! Project catalog controllers: web, mobile and bot projects.
//!
//! The three catalogs share one set of handler bodies; the thin per-catalog
//! handlers exist so each route is documented in the OpenAPI document.

use crate::{
    extractors::JsonBody,
    responses::{created, ok, ApiResult, AppError, CreatedResponse, ProjectListResponse},
    state::AppState,
};
use asmo_core::{NewProject, Project, RecordId};
use asmo_service::CatalogService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

type ProjectService = dyn CatalogService<Project>;

/// Routes for `/api/WebApplications`.
pub fn web_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_web_projects).post(create_web_project))
        .route("/:id", get(get_web_project))
}

/// Routes for `/api/MobileApplications`.
pub fn mobile_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_mobile_projects).post(create_mobile_project))
        .route("/:id", get(get_mobile_project))
}

/// Routes for `/api/Bots`.
pub fn bots_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bot_projects).post(create_bot_project))
        .route("/:id", get(get_bot_project))
}

async fn list(service: &ProjectService) -> ApiResult<ProjectListResponse> {
    debug!(table = service.catalog().table, "List projects request");
    let listing = service.list().await?;
    ok(ProjectListResponse::from(listing))
}

async fn get_one(service: &ProjectService, id: &str) -> ApiResult<Project> {
    debug!(table = service.catalog().table, id, "Get project request");
    let id = RecordId::parse(id)?;
    ok(service.get(id).await?)
}

async fn create(
    service: &ProjectService,
    draft: NewProject,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    debug!(table = service.catalog().table, name = %draft.name, "Create project request");
    let id = service.create(draft).await?;
    Ok(created(service.catalog().resource, id))
}

// ============ Web projects ============

/// List web projects, newest first.
#[utoipa::path(
    get,
    path = "/api/WebApplications",
    tag = "web-projects",
    responses((status = 200, description = "Web projects", body = ProjectListResponse))
)]
pub async fn list_web_projects(State(state): State<AppState>) -> ApiResult<ProjectListResponse> {
    list(state.web_projects.as_ref()).await
}

/// Get a web project by ID.
#[utoipa::path(
    get,
    path = "/api/WebApplications/{id}",
    tag = "web-projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Web project", body = Project),
        (status = 400, description = "Invalid ID", body = asmo_core::ErrorResponse),
        (status = 404, description = "Not found", body = asmo_core::ErrorResponse)
    )
)]
pub async fn get_web_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    get_one(state.web_projects.as_ref(), &id).await
}

/// Create a web project.
#[utoipa::path(
    post,
    path = "/api/WebApplications",
    tag = "web-projects",
    request_body = NewProject,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Invalid body", body = asmo_core::ErrorResponse)
    )
)]
pub async fn create_web_project(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NewProject>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    create(state.web_projects.as_ref(), draft).await
}

// ============ Mobile projects ============

/// List mobile projects, newest first.
#[utoipa::path(
    get,
    path = "/api/MobileApplications",
    tag = "mobile-projects",
    responses((status = 200, description = "Mobile projects", body = ProjectListResponse))
)]
pub async fn list_mobile_projects(State(state): State<AppState>) -> ApiResult<ProjectListResponse> {
    list(state.mobile_projects.as_ref()).await
}

/// Get a mobile project by ID.
#[utoipa::path(
    get,
    path = "/api/MobileApplications/{id}",
    tag = "mobile-projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Mobile project", body = Project),
        (status = 400, description = "Invalid ID", body = asmo_core::ErrorResponse),
        (status = 404, description = "Not found", body = asmo_core::ErrorResponse)
    )
)]
pub async fn get_mobile_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    get_one(state.mobile_projects.as_ref(), &id).await
}

/// Create a mobile project.
#[utoipa::path(
    post,
    path = "/api/MobileApplications",
    tag = "mobile-projects",
    request_body = NewProject,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Invalid body", body = asmo_core::ErrorResponse)
    )
)]
pub async fn create_mobile_project(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NewProject>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    create(state.mobile_projects.as_ref(), draft).await
}

// ============ Bot projects ============

/// List bot projects, newest first.
#[utoipa::path(
    get,
    path = "/api/Bots",
    tag = "bot-projects",
    responses((status = 200, description = "Bot projects", body = ProjectListResponse))
)]
pub async fn list_bot_projects(State(state): State<AppState>) -> ApiResult<ProjectListResponse> {
    list(state.bot_projects.as_ref()).await
}

/// Get a bot project by ID.
#[utoipa::path(
    get,
    path = "/api/Bots/{id}",
    tag = "bot-projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Bot project", body = Project),
        (status = 400, description = "Invalid ID", body = asmo_core::ErrorResponse),
        (status = 404, description = "Not found", body = asmo_core::ErrorResponse)
    )
)]
pub async fn get_bot_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    get_one(state.bot_projects.as_ref(), &id).await
}

/// Create a bot project.
#[utoipa::path(
    post,
    path = "/api/Bots",
    tag = "bot-projects",
    request_body = NewProject,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Invalid body", body = asmo_core::ErrorResponse)
    )
)]
pub async fn create_bot_project(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NewProject>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    create(state.bot_projects.as_ref(), draft).await
}
