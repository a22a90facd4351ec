//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use super::query::QueryParams;

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Encode as the `page` and `limit` query parameters.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("page", self.page.to_string());
        params.push("limit", self.limit.to_string());
        params
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination state derived entirely from a server response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationData {
    /// Current page number (1-based).
    pub current_page: u64,
    /// Total number of pages (at least 1).
    pub total_pages: u64,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// 1-based index of the first item shown, 0 when the page is empty.
    pub start_index: u64,
    /// 1-based index of the last item shown, 0 when the page is empty.
    pub end_index: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl PaginationData {
    /// Derive pagination from the server-reported values.
    ///
    /// `total_pages` from the server wins when present; otherwise it is
    /// computed from `total_count` and `limit`.
    pub fn from_server(
        page: u64,
        limit: u64,
        total_count: u64,
        total_pages: Option<u64>,
        items_on_page: u64,
    ) -> Self {
        let limit = limit.max(1);
        let total_pages = total_pages
            .unwrap_or_else(|| total_count.div_ceil(limit))
            .max(1);
        let current_page = page.max(1);

        let (start_index, end_index) = if items_on_page == 0 {
            (0, 0)
        } else {
            let start = (current_page - 1).saturating_mul(limit).saturating_add(1);
            (start, start.saturating_add(items_on_page - 1))
        };

        Self {
            current_page,
            total_pages,
            total_count,
            start_index,
            end_index,
            has_next: current_page < total_pages,
            has_previous: current_page > 1,
        }
    }

    /// Pagination for a view with nothing loaded yet.
    pub fn empty() -> Self {
        Self::from_server(1, DEFAULT_PAGE_SIZE, 0, None, 0)
    }
}

impl Default for PaginationData {
    fn default() -> Self {
        Self::empty()
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
