use thiserror::Error;

/// Cache-layer failures. Never surfaced past the catalog services.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key absent, expired, or the backend is degraded.
    #[error("cache miss")]
    NotFound,

    /// Payload could not be encoded or decoded.
    #[error("cache payload error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend reported an error while connected.
    #[error("cache backend error: {0}")]
    Backend(String),
}

impl CacheError {
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type CacheResult<T> = Result<T, CacheError>;
