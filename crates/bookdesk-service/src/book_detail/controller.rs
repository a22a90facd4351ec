//! Book detail controller.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use bookdesk_client::api::BookApi;
use bookdesk_core::error::AppError;
use bookdesk_core::result::AppResult;
use bookdesk_core::types::BookId;
use bookdesk_entity::book::{Book, BookStatistics, Pricing};
use bookdesk_entity::user::UserRole;

use crate::access::{Permission, RoleGate};
use crate::generation::RequestGeneration;
use crate::state::{LoadState, Notice};

/// Everything the detail screen shows about one book.
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    /// The book record.
    pub book: Book,
    /// Pricing history, newest first.
    pub pricing: Vec<Pricing>,
    /// Quotation statistics.
    pub statistics: BookStatistics,
}

#[derive(Debug, Default)]
struct DetailState {
    book_id: Option<BookId>,
    detail: Option<BookDetail>,
    load_state: LoadState,
    notice: Option<Notice>,
}

/// Drives the book detail screen.
pub struct BookDetailController {
    /// Book endpoints.
    api: Arc<dyn BookApi>,
    /// Role gate.
    gate: RoleGate,
    /// Role of the signed-in operator.
    role: UserRole,
    /// Screen state.
    state: RwLock<DetailState>,
    /// Stale-response guard.
    generation: RequestGeneration,
}

impl BookDetailController {
    /// Creates a new book detail controller.
    pub fn new(api: Arc<dyn BookApi>, gate: RoleGate, role: UserRole) -> Self {
        Self {
            api,
            gate,
            role,
            state: RwLock::new(DetailState::default()),
            generation: RequestGeneration::new(),
        }
    }

    /// The last successfully loaded detail.
    pub async fn detail(&self) -> Option<BookDetail> {
        self.state.read().await.detail.clone()
    }

    /// Lifecycle of the screen.
    pub async fn load_state(&self) -> LoadState {
        self.state.read().await.load_state.clone()
    }

    /// Remove and return the pending notification.
    pub async fn take_notice(&self) -> Option<Notice> {
        self.state.write().await.notice.take()
    }

    /// Whether the operator may mark books out of print.
    pub fn can_mark_out_of_print(&self) -> bool {
        self.gate.allows(self.role, Permission::MarkOutOfPrint)
    }

    /// Fetch the book, its pricing history and statistics concurrently.
    ///
    /// Any of the three failing fails the whole load.
    pub async fn load(&self, id: &BookId) -> AppResult<()> {
        self.gate.require(self.role, Permission::ViewInventory)?;

        let ticket = {
            let mut state = self.state.write().await;
            if state.book_id.as_ref() != Some(id) {
                state.detail = None;
            }
            state.book_id = Some(id.clone());
            state.load_state = LoadState::Loading;
            self.generation.begin()
        };

        let result = tokio::try_join!(
            self.api.get_book(id),
            self.api.get_pricing_history(id),
            self.api.get_book_statistics(id),
        );

        let mut state = self.state.write().await;
        if !self.generation.is_current(ticket) {
            debug!(book_id = %id, "Discarding stale book detail response");
            return Ok(());
        }

        match result {
            Ok((book, mut pricing, statistics)) => {
                pricing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                info!(book_id = %id, pricing_entries = pricing.len(), "Book detail loaded");
                state.detail = Some(BookDetail {
                    book,
                    pricing,
                    statistics,
                });
                state.load_state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!(book_id = %id, error = %e, "Book detail load failed");
                state.load_state = LoadState::Failed(e.user_message());
                state.notice = Some(Notice::from_error(&e));
                Err(e)
            }
        }
    }

    /// Mark the loaded book out of print, then re-fetch it.
    pub async fn mark_out_of_print(&self) -> AppResult<()> {
        self.gate.require(self.role, Permission::MarkOutOfPrint)?;

        let id = self
            .state
            .read()
            .await
            .book_id
            .clone()
            .ok_or_else(|| AppError::validation("No book is loaded"))?;

        if let Err(e) = self.api.mark_out_of_print(&id).await {
            warn!(book_id = %id, error = %e, "Mark out of print failed");
            self.state.write().await.notice = Some(Notice::from_error(&e));
            return Err(e);
        }

        info!(book_id = %id, "Book marked out of print");
        self.state.write().await.notice = Some(Notice::success("Book marked as out of print"));
        self.load(&id).await
    }
}
