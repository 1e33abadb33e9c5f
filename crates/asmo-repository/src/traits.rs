//! Store trait definitions.

use asmo_core::{AsmoResult, CatalogEntity, Interface, RecordId};
use async_trait::async_trait;

/// Relational store for one catalog.
#[async_trait]
pub trait CatalogStore<E: CatalogEntity>: Interface + Send + Sync {
    /// Returns every record, newest first. An empty table yields an empty vec.
    async fn find_all(&self) -> AsmoResult<Vec<E>>;

    /// Finds a record by ID.
    async fn find_by_id(&self, id: RecordId) -> AsmoResult<Option<E>>;

    /// Inserts a new record and returns the store-assigned ID.
    ///
    /// Both timestamps default to the current time.
    async fn insert(&self, draft: &E::Draft) -> AsmoResult<RecordId>;
}
