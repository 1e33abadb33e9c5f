//! Redis-based cache implementation.

use super::{ttl::entry_ttl_millis, CacheError, CacheInterface, CacheResult};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, PoolConfig, Runtime};
use std::time::Duration;
use tracing::{debug, info, warn};

enum State {
    Connected(Pool),
    Degraded { reason: String },
}

/// Redis-based cache.
///
/// Construction never fails. If the address cannot be parsed or the startup
/// PING does not answer within the timeout, the cache runs degraded for its
/// whole lifetime: writes succeed without storing anything and reads miss.
pub struct RedisCache {
    state: State,
}

impl RedisCache {
    /// Connects to Redis, degrading instead of failing.
    pub async fn connect(url: &str, pool_size: usize, timeout: Duration) -> Self {
        match Self::try_connect(url, pool_size, timeout).await {
            Ok(pool) => {
                info!("Connected to Redis cache");
                Self {
                    state: State::Connected(pool),
                }
            }
            Err(reason) => {
                warn!("Redis unavailable, caching disabled: {}", reason);
                Self::degraded(reason)
            }
        }
    }

    /// Creates a cache that never stores anything.
    #[must_use]
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            state: State::Degraded {
                reason: reason.into(),
            },
        }
    }

    /// Why the cache is degraded, if it is.
    #[must_use]
    pub fn degraded_reason(&self) -> Option<&str> {
        match &self.state {
            State::Connected(_) => None,
            State::Degraded { reason } => Some(reason),
        }
    }

    async fn try_connect(url: &str, pool_size: usize, timeout: Duration) -> Result<Pool, String> {
        let mut config = Config::from_url(url);
        config.pool = Some(PoolConfig::new(pool_size.max(1)));

        let pool = config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| format!("invalid Redis configuration: {}", e))?;

        let ping = async {
            let mut conn = pool
                .get()
                .await
                .map_err(|e| format!("failed to get Redis connection: {}", e))?;
            let pong: String = deadpool_redis::redis::cmd("PING")
                .query_async(&mut conn)
                .await
                .map_err(|e| format!("PING failed: {}", e))?;
            debug!("Redis answered {}", pong);
            Ok::<(), String>(())
        };

        match tokio::time::timeout(timeout, ping).await {
            Ok(Ok(())) => Ok(pool),
            Ok(Err(reason)) => {
                pool.close();
                Err(reason)
            }
            Err(_) => {
                pool.close();
                Err(format!("PING timed out after {}s", timeout.as_secs()))
            }
        }
    }

    async fn get_conn(pool: &Pool) -> CacheResult<deadpool_redis::Connection> {
        pool.get()
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl CacheInterface for RedisCache {
    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>> {
        let pool = match &self.state {
            State::Connected(pool) => pool,
            State::Degraded { .. } => return Ok(None),
        };

        let mut conn = Self::get_conn(pool).await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let pool = match &self.state {
            State::Connected(pool) => pool,
            State::Degraded { .. } => return Ok(()),
        };

        let mut conn = Self::get_conn(pool).await?;
        let ttl_ms = entry_ttl_millis(ttl);

        conn.pset_ex::<_, _, ()>(key, value, ttl_ms)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}ms", key, ttl_ms);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let pool = match &self.state {
            State::Connected(pool) => pool,
            State::Degraded { .. } => return Ok(()),
        };

        let mut conn = Self::get_conn(pool).await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}' ({} removed)", key, deleted);
        Ok(())
    }

    async fn close(&self) {
        if let State::Connected(pool) = &self.state {
            if !pool.is_closed() {
                info!("Closing Redis connection pool");
                pool.close();
            }
        }
    }

    fn is_connected(&self) -> bool {
        match &self.state {
            State::Connected(pool) => !pool.is_closed(),
            State::Degraded { .. } => false,
        }
    }
}
