//! Pagination and sorting types shared by list queries.

use serde::{Deserialize, Serialize};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// A normalized page request.
///
/// `page` is 1-based and at least 1; `limit` is clamped to `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Normalizes raw query values, applying defaults and bounds.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// ceil(total / limit), never below 1.
    pub fn total_pages(&self) -> u64 {
        let limit = self.request.limit() as u64;
        self.total.div_ceil(limit).max(1)
    }

    /// Applies `f` to every item, keeping pagination data.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}

/// Sortable user columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSortField {
    #[default]
    CreatedAt,
    Name,
    Id,
}

/// Options for listing users.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserListOptions {
    pub page: PageRequest,
    pub sort_by: UserSortField,
    pub order: SortOrder,
}

/// Sortable workout session columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutSortField {
    #[default]
    StartedAt,
    EndedAt,
    Id,
}

/// Status filter for session lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    Active,
    #[serde(alias = "completed")]
    Ended,
    #[default]
    All,
}

/// Options for listing a user's workout sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutListOptions {
    pub status: StatusFilter,
    pub page: PageRequest,
    pub sort_by: WorkoutSortField,
    pub order: SortOrder,
}
