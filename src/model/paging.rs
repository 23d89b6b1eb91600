//! Page/limit bound from the query string; `total` is filled in by storage.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(skip_deserializing)]
    pub total: i64,
}

impl Paging {
    pub fn new(page: i64, limit: i64) -> Self {
        let mut paging = Paging {
            page,
            limit,
            total: 0,
        };
        paging.fulfill();
        paging
    }

    /// Replace missing or out-of-range values with defaults.
    pub fn fulfill(&mut self) {
        if self.page < 1 {
            self.page = 1;
        }
        if self.limit < 1 {
            self.limit = DEFAULT_LIMIT;
        }
        self.limit = self.limit.min(MAX_LIMIT);
    }

    /// Rows to skip. Saturates instead of overflowing for huge page numbers.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit)
    }
}
