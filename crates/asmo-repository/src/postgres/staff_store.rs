//! Postgres staff store.

use crate::{traits::CatalogStore, DatabasePoolInterface};
use asmo_core::{AsmoResult, NewStaffMember, RecordId, StaffMember};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Staff store over the `staff` table.
#[derive(Clone)]
pub struct PgStaffStore {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgStaffStore {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore<StaffMember> for PgStaffStore {
    async fn find_all(&self) -> AsmoResult<Vec<StaffMember>> {
        debug!("Selecting all staff members");

        let rows = sqlx::query_as::<_, StaffMember>(
            r#"
            SELECT id, name, description, img, role, created_at, update_at
            FROM staff
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: RecordId) -> AsmoResult<Option<StaffMember>> {
        debug!(%id, "Selecting staff member by id");

        let row = sqlx::query_as::<_, StaffMember>(
            r#"
            SELECT id, name, description, img, role, created_at, update_at
            FROM staff
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row)
    }

    async fn insert(&self, draft: &NewStaffMember) -> AsmoResult<RecordId> {
        debug!(name = %draft.name, "Inserting staff member");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO staff (name, description, img, role, created_at, update_at)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.img)
        .bind(&draft.role)
        .fetch_one(self.pool.inner())
        .await?;

        RecordId::new(id)
    }
}
