use asmo_config::CacheConfig;
use std::time::Duration;

/// Default TTL for whole-collection entries (5 minutes).
pub const COLLECTION_TTL: Duration = Duration::from_secs(300);

/// Default TTL for single-item entries (10 minutes).
pub const ITEM_TTL: Duration = Duration::from_secs(600);

/// Expiry applied by the catalog services. Collection and item entries
/// expire independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtl {
    pub collection: Duration,
    pub item: Duration,
}

impl Default for CacheTtl {
    fn default() -> Self {
        Self {
            collection: COLLECTION_TTL,
            item: ITEM_TTL,
        }
    }
}

impl From<&CacheConfig> for CacheTtl {
    fn from(config: &CacheConfig) -> Self {
        Self {
            collection: config.collection_ttl(),
            item: config.item_ttl(),
        }
    }
}

/// Shortest expiry a backend stores. Redis rejects a zero `PX`.
pub const MIN_ENTRY_TTL: Duration = Duration::from_millis(1);

/// Longest expiry a backend stores.
pub const MAX_ENTRY_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Clamps a requested TTL into the range every backend stores identically,
/// at millisecond precision.
pub fn entry_ttl(ttl: Duration) -> Duration {
    ttl.clamp(MIN_ENTRY_TTL, MAX_ENTRY_TTL)
}

/// `entry_ttl` in whole milliseconds, as sent with `PSETEX`.
pub fn entry_ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(entry_ttl(ttl).as_millis()).unwrap_or(u64::MAX)
}
