//! Offset pagination shared by list operations

use serde::Deserialize;

/// Number of items returned when a caller does not ask for a limit
pub const DEFAULT_LIMIT: i64 = 50;

/// Pagination parameters as they arrive from a caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Resolved window handed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }

    /// Clamp to `0..` for the offset and `1..=max_limit` for the limit
    pub fn page(&self, max_limit: i64) -> Page {
        let max_limit = max_limit.max(1);
        Page {
            offset: self.skip.unwrap_or(0).max(0),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, max_limit),
        }
    }
}

impl Page {
    /// Every row, used by aggregate reads
    pub fn all() -> Self {
        Self {
            offset: 0,
            limit: i64::MAX,
        }
    }
}
