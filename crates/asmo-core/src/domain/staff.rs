//! Staff member entity.

use crate::{rules, CatalogEntity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A member of the team shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub img: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl CatalogEntity for StaffMember {
    type Draft = NewStaffMember;
}

/// Request body for adding a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewStaffMember {
    #[validate(
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"),
        custom(function = "rules::not_blank")
    )]
    pub name: String,

    #[validate(length(
        min = 10,
        max = 2000,
        message = "Description must be between 10 and 2000 characters"
    ))]
    pub description: String,

    #[validate(
        url(message = "Image must be a valid URL"),
        length(max = 500, message = "Image URL must be at most 500 characters")
    )]
    pub img: String,

    #[validate(
        length(min = 2, max = 100, message = "Role must be between 2 and 100 characters"),
        custom(function = "rules::not_blank")
    )]
    pub role: String,
}
