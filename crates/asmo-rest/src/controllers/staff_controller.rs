//! Staff controller.

use crate::{
    extractors::JsonBody,
    responses::{created, ok, ApiResult, AppError, CreatedResponse, StaffListResponse},
    state::AppState,
};
use asmo_core::{NewStaffMember, RecordId, StaffMember};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

/// Routes for `/api/Staff`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_staff).post(create_staff_member))
        .route("/:id", get(get_staff_member))
}

/// List staff members, newest first.
#[utoipa::path(
    get,
    path = "/api/Staff",
    tag = "staff",
    responses((status = 200, description = "Staff members", body = StaffListResponse))
)]
pub async fn list_staff(State(state): State<AppState>) -> ApiResult<StaffListResponse> {
    debug!("List staff request");
    let listing = state.staff.list().await?;
    ok(StaffListResponse::from(listing))
}

/// Get a staff member by ID.
#[utoipa::path(
    get,
    path = "/api/Staff/{id}",
    tag = "staff",
    params(("id" = i64, Path, description = "Staff member ID")),
    responses(
        (status = 200, description = "Staff member", body = StaffMember),
        (status = 400, description = "Invalid ID", body = asmo_core::ErrorResponse),
        (status = 404, description = "Not found", body = asmo_core::ErrorResponse)
    )
)]
pub async fn get_staff_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StaffMember> {
    debug!("Get staff member request: {}", id);
    let id = RecordId::parse(&id)?;
    ok(state.staff.get(id).await?)
}

/// Add a staff member.
#[utoipa::path(
    post,
    path = "/api/Staff",
    tag = "staff",
    request_body = NewStaffMember,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Invalid body", body = asmo_core::ErrorResponse)
    )
)]
pub async fn create_staff_member(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NewStaffMember>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    debug!("Create staff member request: {}", draft.name);
    let id = state.staff.create(draft).await?;
    Ok(created(state.staff.catalog().resource, id))
}
