//! Response DTOs.

use serde::{Deserialize, Serialize};

use bookdesk_core::types::PaginationData;
use bookdesk_entity::book::Book;
use bookdesk_entity::user::User;

/// A payload that the backend returns either bare or wrapped in `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// `{ "data": ... }`
    Wrapped {
        /// The payload.
        data: T,
    },
    /// The payload itself.
    Bare(T),
}

impl<T> Envelope<T> {
    /// Unwrap the payload.
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(data) => data,
        }
    }
}

/// Paginated list body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Server pagination block.
    #[serde(default)]
    pub pagination: Option<WirePagination>,
}

/// Pagination block as sent by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WirePagination {
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Total item count.
    pub total: u64,
    /// Total pages.
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// One page of books with derived pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPage {
    /// Books on this page.
    pub books: Vec<Book>,
    /// Pagination derived from the response.
    pub pagination: PaginationData,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    pub token: String,
    /// The signed-in account.
    pub user: User,
}

/// Batch delete result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    /// Number of books removed.
    pub deleted: u64,
}

/// Standard API error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}
