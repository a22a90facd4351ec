//! Resource-level API traits.
//!
//! Controllers hold `Arc<dyn BookApi>` (and friends) rather than the
//! concrete client.

use async_trait::async_trait;

use bookdesk_core::result::AppResult;
use bookdesk_core::types::{BookId, PageRequest};
use bookdesk_entity::book::{Book, BookFilters, BookStatistics, Pricing};
use bookdesk_entity::email::EmailMessage;
use bookdesk_entity::quotation::Quotation;
use bookdesk_entity::user::User;

use crate::dto::response::{BookPage, LoginResponse};

/// Book catalog endpoints.
#[async_trait]
pub trait BookApi: Send + Sync + 'static {
    /// Fetch one server-side page of books matching `filters`.
    async fn list_books(&self, page: PageRequest, filters: &BookFilters) -> AppResult<BookPage>;

    /// Fetch a single book.
    async fn get_book(&self, id: &BookId) -> AppResult<Book>;

    /// Fetch a book's pricing history, oldest first.
    async fn get_pricing_history(&self, id: &BookId) -> AppResult<Vec<Pricing>>;

    /// Fetch lightweight usage statistics for a book.
    async fn get_book_statistics(&self, id: &BookId) -> AppResult<BookStatistics>;

    /// Mark a book as out of print.
    async fn mark_out_of_print(&self, id: &BookId) -> AppResult<()>;

    /// Delete several books in one call. Returns the number deleted.
    async fn delete_books(&self, ids: &[BookId]) -> AppResult<u64>;
}

/// Quotation endpoints.
#[async_trait]
pub trait QuotationApi: Send + Sync + 'static {
    /// Fetch the complete quotation set.
    async fn list_quotations(&self) -> AppResult<Vec<Quotation>>;
}

/// Inbox endpoints.
#[async_trait]
pub trait EmailApi: Send + Sync + 'static {
    /// Fetch the inbox messages.
    async fn list_emails(&self) -> AppResult<Vec<EmailMessage>>;
}

/// Authentication and password recovery endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync + 'static {
    /// Exchange credentials for a bearer token.
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse>;

    /// The bearer token this client sends, if any.
    fn session_token(&self) -> Option<String>;

    /// Fetch the account the current token belongs to.
    async fn current_user(&self) -> AppResult<User>;

    /// Ask the backend to email a password-reset link.
    async fn request_password_reset(&self, email: &str) -> AppResult<()>;

    /// Set a new password using a reset token.
    async fn reset_password(&self, token: &str, password: &str) -> AppResult<()>;
}
