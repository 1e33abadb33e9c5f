//! Cache interface trait for abstracted caching operations.

use super::{CacheError, CacheResult};
use asmo_core::Interface;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, has expired, or the backend
    /// is degraded.
    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL, overwriting any entry.
    /// Backends store the TTL at millisecond precision, clamped to at least 1 ms.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Delete a value from the cache. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Release backend resources. Safe to call more than once. Infallible on
    /// every backend, so there is no error to report.
    async fn close(&self);

    /// Whether operations reach a live backend.
    fn is_connected(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// A missing key yields `CacheError::NotFound`.
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> CacheResult<T> {
        let json = self.get_raw(key).await?.ok_or(CacheError::NotFound)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Set a typed value in the cache.
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> CacheResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
