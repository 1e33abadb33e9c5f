//! Postgres project store, shared by the three project catalogs.

use crate::{traits::CatalogStore, DatabasePoolInterface};
use asmo_core::{AsmoResult, Catalog, NewProject, Project, RecordId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Project store bound to one catalog table.
///
/// Table names come from the `Catalog` constants, never from input.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: Arc<dyn DatabasePoolInterface>,
    table: &'static str,
    queries: ProjectQueries,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectQueries {
    select_all: String,
    select_one: String,
    insert: String,
}

impl ProjectQueries {
    fn for_table(table: &str) -> Self {
        const COLUMNS: &str =
            "id, name, description, img, price, time_develop, created_at, update_at";
        Self {
            select_all: format!("SELECT {COLUMNS} FROM {table} ORDER BY created_at DESC"),
            select_one: format!("SELECT {COLUMNS} FROM {table} WHERE id = $1"),
            insert: format!(
                "INSERT INTO {table} (name, description, img, price, time_develop, created_at, update_at) \
                 VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP) RETURNING id"
            ),
        }
    }
}

impl PgProjectStore {
    /// Creates a store for a project catalog.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>, catalog: Catalog) -> Self {
        debug_assert_ne!(catalog, Catalog::STAFF, "staff has its own store");
        Self {
            pool,
            table: catalog.table,
            queries: ProjectQueries::for_table(catalog.table),
        }
    }

    #[must_use]
    pub fn web(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self::new(pool, Catalog::WEB_PROJECTS)
    }

    #[must_use]
    pub fn mobile(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self::new(pool, Catalog::MOBILE_PROJECTS)
    }

    #[must_use]
    pub fn bots(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self::new(pool, Catalog::BOT_PROJECTS)
    }
}

#[async_trait]
impl CatalogStore<Project> for PgProjectStore {
    async fn find_all(&self) -> AsmoResult<Vec<Project>> {
        debug!(table = self.table, "Selecting all projects");

        let rows = sqlx::query_as::<_, Project>(&self.queries.select_all)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: RecordId) -> AsmoResult<Option<Project>> {
        debug!(table = self.table, %id, "Selecting project by id");

        let row = sqlx::query_as::<_, Project>(&self.queries.select_one)
            .bind(id.get())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row)
    }

    async fn insert(&self, draft: &NewProject) -> AsmoResult<RecordId> {
        debug!(table = self.table, name = %draft.name, "Inserting project");

        let id: i64 = sqlx::query_scalar(&self.queries.insert)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(&draft.img)
            .bind(draft.price)
            .bind(draft.time_develop)
            .fetch_one(self.pool.inner())
            .await?;

        RecordId::new(id)
    }
}
