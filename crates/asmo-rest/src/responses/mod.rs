//! API response types.

use asmo_core::{AsmoError, ErrorResponse, Project, RecordId, StaffMember};
use asmo_service::Listing;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// A project catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub count: usize,
    /// True when served from the cache
    pub cached: bool,
}

impl From<Listing<Project>> for ProjectListResponse {
    fn from(listing: Listing<Project>) -> Self {
        Self {
            count: listing.items.len(),
            cached: listing.from_cache,
            projects: listing.items,
        }
    }
}

/// The staff listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaffListResponse {
    pub staff: Vec<StaffMember>,
    pub count: usize,
    /// True when served from the cache
    pub cached: bool,
}

impl From<Listing<StaffMember>> for StaffListResponse {
    fn from(listing: Listing<StaffMember>) -> Self {
        Self {
            count: listing.items.len(),
            cached: listing.from_cache,
            staff: listing.items,
        }
    }
}

/// Body returned after a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub AsmoError);

impl From<AsmoError> for AppError {
    fn from(err: AsmoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created(resource: &str, id: RecordId) -> (StatusCode, Json<CreatedResponse>) {
    (
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: format!("{resource} created successfully"),
            id: id.get(),
        }),
    )
}
