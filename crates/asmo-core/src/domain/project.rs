//! Project entity shared by the web, mobile and bot catalogs.

use crate::{rules, CatalogEntity, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub img: String,
    pub price: f64,
    /// Development time in days
    pub time_develop: i32,
    pub created_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl Project {
    /// Returns the typed record id.
    pub fn record_id(&self) -> Result<RecordId, crate::AsmoError> {
        RecordId::new(self.id)
    }
}

impl CatalogEntity for Project {
    type Draft = NewProject;
}

/// Request body for creating a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewProject {
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

    #[validate(range(min = 0.0, max = 100_000_000.0, message = "Price must be between 0 and 100000000"))]
    pub price: f64,

    #[validate(range(min = 1, max = 3650, message = "Development time must be between 1 and 3650 days"))]
    pub time_develop: i32,
}
