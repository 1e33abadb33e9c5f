//! Prometheus metrics for catalog reads and writes.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Instant;

/// Metric names.
pub mod names {
    /// Time spent serving a catalog operation, by source.
    pub const DATABASE_QUERY_DURATION: &str = "asmo_database_query_duration_seconds";
    /// Cache lookups by outcome.
    pub const CACHE_LOOKUPS_TOTAL: &str = "asmo_cache_lookups_total";
}

/// Operation labels.
pub mod operations {
    pub const CACHE_HIT: &str = "cache_hit";
    pub const SELECT: &str = "select";
    pub const INSERT: &str = "insert";
    pub const PING: &str = "ping";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_histogram!(
        names::DATABASE_QUERY_DURATION,
        "Catalog query duration in seconds, labelled by operation and table"
    );
    describe_counter!(
        names::CACHE_LOOKUPS_TOTAL,
        "Cache lookups, labelled by table and result (hit or miss)"
    );
}

/// Records the duration of one operation against a table.
pub fn record_query(operation: &'static str, table: &'static str, started: Instant) {
    histogram!(
        names::DATABASE_QUERY_DURATION,
        "operation" => operation,
        "table" => table
    )
    .record(started.elapsed().as_secs_f64());
}

/// Counts a cache lookup.
pub fn record_cache_lookup(table: &'static str, hit: bool) {
    counter!(
        names::CACHE_LOOKUPS_TOTAL,
        "table" => table,
        "result" => if hit { "hit" } else { "miss" }
    )
    .increment(1);
}
