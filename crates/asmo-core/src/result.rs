//! Result type aliases.

use crate::AsmoError;

/// A specialized `Result` type for backend operations.
pub type AsmoResult<T> = Result<T, AsmoError>;
