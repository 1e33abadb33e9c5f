//! Catalog service trait definition.

use asmo_core::{AsmoResult, Catalog, CatalogEntity, Interface, RecordId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A catalog collection and where it was served from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<E> {
    pub items: Vec<E>,
    pub from_cache: bool,
}

impl<E> Listing<E> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Read and create operations for one catalog.
#[async_trait]
pub trait CatalogService<E: CatalogEntity>: Interface + Send + Sync {
    /// Lists the whole catalog, newest first.
    async fn list(&self) -> AsmoResult<Listing<E>>;

    /// Fetches one record. Unknown IDs yield `AsmoError::NotFound`.
    async fn get(&self, id: RecordId) -> AsmoResult<E>;

    /// Validates and stores a new record, returning its ID.
    async fn create(&self, draft: E::Draft) -> AsmoResult<RecordId>;

    /// Catalog this service serves.
    fn catalog(&self) -> Catalog;
}
