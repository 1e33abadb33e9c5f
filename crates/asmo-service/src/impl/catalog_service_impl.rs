//! Look-aside catalog service.

use crate::cache::{cache_keys, CacheError, CacheExt, CacheInterface, CacheTtl};
use crate::catalog_service::{CatalogService, Listing};
use crate::metrics::{operations, record_cache_lookup, record_query};
use asmo_core::{AsmoError, AsmoResult, Catalog, CatalogEntity, RecordId, ValidateExt};
use asmo_repository::CatalogStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Catalog service that reads through the cache and invalidates the
/// collection entry after every write.
///
/// The store is authoritative. Cache failures of any kind degrade to a miss
/// on reads and are logged and ignored on writes.
pub struct CachedCatalogService<E: CatalogEntity> {
    catalog: Catalog,
    store: Arc<dyn CatalogStore<E>>,
    cache: Arc<dyn CacheInterface>,
    ttl: CacheTtl,
}

impl<E: CatalogEntity> CachedCatalogService<E> {
    /// Creates a new catalog service.
    pub fn new(
        catalog: Catalog,
        store: Arc<dyn CatalogStore<E>>,
        cache: Arc<dyn CacheInterface>,
        ttl: CacheTtl,
    ) -> Self {
        Self {
            catalog,
            store,
            cache,
            ttl,
        }
    }

    /// Looks up a cached value, folding every failure into `None`.
    async fn cached<T>(&self, key: &str) -> Option<T>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        match self.cache.get::<T>(key).await {
            Ok(value) => {
                record_cache_lookup(self.catalog.table, true);
                debug!(key, "Cache hit");
                Some(value)
            }
            Err(CacheError::NotFound) => {
                record_cache_lookup(self.catalog.table, false);
                debug!(key, "Cache miss");
                None
            }
            Err(e) => {
                record_cache_lookup(self.catalog.table, false);
                warn!(key, error = %e, "Cache read failed, falling back to store");
                None
            }
        }
    }

    fn store_failed(&self, operation: &'static str) -> impl Fn(AsmoError) -> AsmoError + '_ {
        move |e| {
            error!(table = self.catalog.table, operation, error = %e, "Store operation failed");
            e
        }
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogService<E> for CachedCatalogService<E> {
    async fn list(&self) -> AsmoResult<Listing<E>> {
        let key = cache_keys::collection(&self.catalog);

        let started = Instant::now();
        if let Some(items) = self.cached::<Vec<E>>(key).await {
            record_query(operations::CACHE_HIT, self.catalog.table, started);
            return Ok(Listing {
                items,
                from_cache: true,
            });
        }

        let started = Instant::now();
        let items = self
            .store
            .find_all()
            .await
            .map_err(self.store_failed(operations::SELECT))?;
        record_query(operations::SELECT, self.catalog.table, started);

        if let Err(e) = self.cache.set(key, &items, self.ttl.collection).await {
            warn!(key, error = %e, "Failed to cache collection");
        }

        Ok(Listing {
            items,
            from_cache: false,
        })
    }

    async fn get(&self, id: RecordId) -> AsmoResult<E> {
        let key = cache_keys::item(&self.catalog, id);

        let started = Instant::now();
        if let Some(item) = self.cached::<E>(&key).await {
            record_query(operations::CACHE_HIT, self.catalog.table, started);
            return Ok(item);
        }

        let started = Instant::now();
        let item = self
            .store
            .find_by_id(id)
            .await
            .map_err(self.store_failed(operations::SELECT))?
            .ok_or_else(|| AsmoError::not_found(self.catalog.resource, id))?;
        record_query(operations::SELECT, self.catalog.table, started);

        if let Err(e) = self.cache.set(&key, &item, self.ttl.item).await {
            warn!(key = %key, error = %e, "Failed to cache item");
        }

        Ok(item)
    }

    async fn create(&self, draft: E::Draft) -> AsmoResult<RecordId> {
        draft.validate_request()?;

        let started = Instant::now();
        let id = self
            .store
            .insert(&draft)
            .await
            .map_err(self.store_failed(operations::INSERT))?;
        record_query(operations::INSERT, self.catalog.table, started);

        let key = cache_keys::collection(&self.catalog);
        if let Err(e) = self.cache.delete(key).await {
            warn!(key, error = %e, "Failed to invalidate collection");
        }

        info!(table = self.catalog.table, %id, "Record created");
        Ok(id)
    }

    fn catalog(&self) -> Catalog {
        self.catalog
    }
}
