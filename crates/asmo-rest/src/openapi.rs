//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{HealthResponse, HealthTimestamp};
use crate::responses::{CreatedResponse, ProjectListResponse, StaffListResponse};
use asmo_core::{ErrorResponse, FieldError, NewProject, NewStaffMember, Project, StaffMember};
use utoipa::OpenApi;

/// OpenAPI documentation for the ASMO site API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ASMO Site API",
        version = "1.0.0",
        description = "Portfolio catalogs and staff directory for the ASMO site"
    ),
    paths(
        crate::controllers::health_controller::health_check,
        crate::controllers::project_controller::list_web_projects,
        crate::controllers::project_controller::get_web_project,
        crate::controllers::project_controller::create_web_project,
        crate::controllers::project_controller::list_mobile_projects,
        crate::controllers::project_controller::get_mobile_project,
        crate::controllers::project_controller::create_mobile_project,
        crate::controllers::project_controller::list_bot_projects,
        crate::controllers::project_controller::get_bot_project,
        crate::controllers::project_controller::create_bot_project,
        crate::controllers::staff_controller::list_staff,
        crate::controllers::staff_controller::get_staff_member,
        crate::controllers::staff_controller::create_staff_member,
    ),
    components(
        schemas(
            Project,
            NewProject,
            StaffMember,
            NewStaffMember,
            ProjectListResponse,
            StaffListResponse,
            CreatedResponse,
            HealthResponse,
            HealthTimestamp,
            ErrorResponse,
            FieldError,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "web-projects", description = "Web application portfolio"),
        (name = "mobile-projects", description = "Mobile application portfolio"),
        (name = "bot-projects", description = "Bot portfolio"),
        (name = "staff", description = "Staff directory")
    )
)]
pub struct ApiDoc;
