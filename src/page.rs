//! Offset/limit pagination input for listing records.

use serde::{Deserialize, Serialize};

/// Number of records returned by a listing when no limit is given.
pub const DEFAULT_LIMIT: u64 = 100;

/// Offset/limit window over a listing ordered by primary key.
///
/// Missing fields fall back to the defaults when deserialized, so `{}` is the first
/// `DEFAULT_LIMIT` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Number of records to skip.
    pub skip: u64,
    /// Maximum number of records to return.
    pub limit: u64,
}

impl Page {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
