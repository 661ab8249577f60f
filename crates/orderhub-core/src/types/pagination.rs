//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Page size used when the caller supplies none (or a non-positive one).
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Largest page size a query may request.
pub const MAX_PAGE_SIZE: u32 = 200;

/// A normalized, 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page_number: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl PageRequest {
    /// Build a page window from raw caller input.
    ///
    /// A non-positive page number becomes 1 and a non-positive page size
    /// becomes [`DEFAULT_PAGE_SIZE`]. Sizes are not capped here.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        let page_number = if page_number <= 0 {
            1
        } else {
            u32::try_from(page_number).unwrap_or(u32::MAX)
        };
        let page_size = if page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            u32::try_from(page_size).unwrap_or(u32::MAX)
        };
        Self {
            page_number,
            page_size,
        }
    }

    /// Limit the page size to `max`.
    pub fn capped(self, max: u32) -> Self {
        Self {
            page_size: self.page_size.min(max),
            ..self
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items matching the filter across all pages.
    pub total_count: u64,
    /// Current page number (1-based).
    pub page_number: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Total number of pages (0 when nothing matched).
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> PagedResult<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: PageRequest, total_count: u64) -> Self {
        let size = u64::from(page.page_size.max(1));
        let total_pages = total_count.div_ceil(size);
        Self {
            items,
            total_count,
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages,
            has_next: u64::from(page.page_number) < total_pages,
            has_previous: page.page_number > 1,
        }
    }

    /// Create an empty response.
    pub fn empty(page: PageRequest) -> Self {
        Self::new(Vec::new(), page, 0)
    }

    /// Transform the items, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
