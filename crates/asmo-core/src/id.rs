//! Typed record identifiers.

use crate::AsmoError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Store-assigned identifier for catalog records.
///
/// Always positive. Zero and negative values are rejected at construction so
/// they never reach the cache or the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Creates a record ID, rejecting non-positive values.
    pub fn new(raw: i64) -> Result<Self, AsmoError> {
        if raw <= 0 {
            return Err(AsmoError::validation(format!(
                "id must be a positive integer, got {raw}"
            )));
        }
        Ok(Self(raw))
    }

    /// Parses a record ID from a path segment.
    pub fn parse(s: &str) -> Result<Self, AsmoError> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|_| AsmoError::validation(format!("invalid id: {s}")))?;
        Self::new(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl TryFrom<i64> for RecordId {
    type Error = AsmoError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}
