//! Look-aside caching infrastructure for the service layer.
//!
//! The cache only ever holds disposable copies of store data. Two backends
//! satisfy the same contract: Redis for deployments and an in-process map
//! for tests and single-node development.

mod cache_interface;
pub mod cache_keys;
mod error;
mod memory_cache;
mod redis_cache;
mod ttl;

pub use cache_interface::{CacheExt, CacheInterface};
pub use error::{CacheError, CacheResult};
pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;
pub use ttl::{CacheTtl, COLLECTION_TTL, ITEM_TTL};
