//! Pagination types shared by the list endpoints.
//!
//! Single entities are returned bare; list endpoints wrap their rows
//! in [`Paginated`] which adds page metadata alongside the data.

use serde::{Deserialize, Serialize};

/// Paginated list envelope: `{ "data": [...], "page", "per_page", "total" }`.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

/// Default page size for list endpoints.
pub const DEFAULT_PER_PAGE: i64 = 10;
/// Upper bound on page size.
pub const MAX_PER_PAGE: i64 = 100;

/// Query params for list endpoints: `?page=1&per_page=10`.
///
/// Pages are 1-based. Out-of-range values are clamped rather than
/// rejected.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageQuery {
    /// The 1-based page number, at least 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, clamped to `1..=MAX_PER_PAGE`.
    pub fn per_page(&self) -> i64 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.per_page()
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }
}
