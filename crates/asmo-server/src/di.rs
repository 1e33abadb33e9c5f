//! Component wiring.
//!
//! Stores, the cache and the four catalog services are assembled here into
//! the `AppState` handed to the router. Everything is shared through `Arc`.

use asmo_config::{AppConfig, RedisConfig};
use asmo_core::{AsmoResult, Catalog, HealthCheck, Project, StaffMember};
use asmo_repository::{DatabasePool, DatabasePoolInterface, PgProjectStore, PgStaffStore};
use asmo_rest::AppState;
use asmo_service::{CacheInterface, CacheTtl, CachedCatalogService, RedisCache};
use std::sync::Arc;
use tracing::{info, warn};

/// Long-lived components that need an orderly shutdown.
pub struct AppComponents {
    pub state: AppState,
    pub pool: Arc<DatabasePool>,
    pub cache: Arc<dyn CacheInterface>,
}

impl AppComponents {
    /// Closes the cache, then the database pool.
    pub async fn shutdown(&self) {
        self.cache.close().await;
        self.pool.close().await;
    }
}

/// Connects every backing service and builds the application state.
///
/// A database that cannot be reached fails startup; the cache degrades to a
/// pass-through instead.
pub async fn build_components(config: &AppConfig) -> AsmoResult<AppComponents> {
    let pool = Arc::new(DatabasePool::connect(&config.database).await?);

    if config.database.run_migrations {
        pool.run_migrations().await?;
    } else {
        info!("Skipping database migrations");
    }

    let cache = connect_cache(&config.redis).await;
    let state = build_state(config, pool.clone(), pool.clone(), cache.clone());

    Ok(AppComponents { state, pool, cache })
}

/// Connects the Redis cache, or returns a degraded one when disabled.
///
/// Never fails.
pub async fn connect_cache(config: &RedisConfig) -> Arc<dyn CacheInterface> {
    if !config.enabled {
        warn!("Redis disabled by configuration, running without cache");
        return Arc::new(RedisCache::degraded("disabled by configuration"));
    }
    Arc::new(RedisCache::connect(&config.url, config.pool_size, config.connect_timeout()).await)
}

/// Builds the router state from already connected components.
pub fn build_state(
    config: &AppConfig,
    pool: Arc<dyn DatabasePoolInterface>,
    database: Arc<dyn HealthCheck>,
    cache: Arc<dyn CacheInterface>,
) -> AppState {
    let ttl = CacheTtl::from(&config.cache);

    let project_service = |catalog: Catalog| {
        Arc::new(CachedCatalogService::<Project>::new(
            catalog,
            Arc::new(PgProjectStore::new(pool.clone(), catalog)),
            cache.clone(),
            ttl,
        ))
    };

    AppState {
        web_projects: project_service(Catalog::WEB_PROJECTS),
        mobile_projects: project_service(Catalog::MOBILE_PROJECTS),
        bot_projects: project_service(Catalog::BOT_PROJECTS),
        staff: Arc::new(CachedCatalogService::<StaffMember>::new(
            Catalog::STAFF,
            Arc::new(PgStaffStore::new(pool.clone())),
            cache.clone(),
            ttl,
        )),
        database,
        cache,
        app: config.app.clone(),
    }
}
