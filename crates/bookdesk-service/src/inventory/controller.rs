//! Inventory controller.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use bookdesk_client::api::BookApi;
use bookdesk_core::result::AppResult;
use bookdesk_core::types::{BookId, PageRequest, PaginationData};
use bookdesk_entity::book::{Book, BookFilters};
use bookdesk_entity::user::UserRole;

use crate::access::{Permission, RoleGate};
use crate::generation::RequestGeneration;
use crate::state::{LoadState, Notice};

use super::selection::Selection;

/// Snapshot of the inventory screen.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryView {
    /// Books on the current page, in server order.
    pub books: Vec<Book>,
    /// Pagination of the last successful load.
    pub pagination: PaginationData,
    /// Page that the next load requests.
    pub page: u64,
    /// Filters being edited.
    pub pending: BookFilters,
    /// Filters sent with every load.
    pub applied: BookFilters,
    /// Books ticked for a batch action.
    pub selection: Selection,
    /// Lifecycle of the listing.
    pub load_state: LoadState,
    /// Notification raised by the last operation.
    pub notice: Option<Notice>,
}

impl InventoryView {
    fn new() -> Self {
        Self {
            books: Vec::new(),
            pagination: PaginationData::empty(),
            page: 1,
            pending: BookFilters::default(),
            applied: BookFilters::default(),
            selection: Selection::new(),
            load_state: LoadState::Idle,
            notice: None,
        }
    }
}

/// Result of [`InventoryController::bulk_delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was selected; no request was sent.
    NothingSelected,
    /// The operator declined the confirmation.
    Declined,
    /// The backend removed this many books.
    Deleted(u64),
}

impl DeleteOutcome {
    /// Text reported to the operator.
    pub fn message(&self) -> String {
        match self {
            Self::NothingSelected => "No books selected".to_string(),
            Self::Declined => "Cancelled".to_string(),
            Self::Deleted(count) => {
                format!("Deleted {count} book{}", if *count == 1 { "" } else { "s" })
            }
        }
    }
}

/// Drives the book inventory screen.
///
/// Listing is server-paginated with a fixed page size. Filters are kept
/// twice: `pending` (being edited) and `applied` (sent with each load).
pub struct InventoryController {
    /// Book endpoints.
    api: Arc<dyn BookApi>,
    /// Role gate for destructive actions.
    gate: RoleGate,
    /// Role of the signed-in operator.
    role: UserRole,
    /// Fixed page size.
    page_size: u64,
    /// Screen state.
    state: RwLock<InventoryView>,
    /// Stale-response guard for listing requests.
    generation: RequestGeneration,
}

impl InventoryController {
    /// Creates a new inventory controller.
    pub fn new(api: Arc<dyn BookApi>, gate: RoleGate, role: UserRole, page_size: u64) -> Self {
        Self {
            api,
            gate,
            role,
            page_size: page_size.max(1),
            state: RwLock::new(InventoryView::new()),
            generation: RequestGeneration::new(),
        }
    }

    /// A copy of the current screen state.
    pub async fn view(&self) -> InventoryView {
        self.state.read().await.clone()
    }

    /// Remove and return the pending notification.
    pub async fn take_notice(&self) -> Option<Notice> {
        self.state.write().await.notice.take()
    }

    /// Whether the operator may delete books.
    pub fn can_delete(&self) -> bool {
        self.gate.allows(self.role, Permission::DeleteBooks)
    }

    /// Fetch the current page with the applied filters.
    ///
    /// A response that arrives after a newer load has started is dropped
    /// and leaves the state untouched.
    pub async fn load(&self) -> AppResult<()> {
        self.gate.require(self.role, Permission::ViewInventory)?;

        let (request, filters, ticket) = {
            let mut state = self.state.write().await;
            state.load_state = LoadState::Loading;
            (
                PageRequest::new(state.page, self.page_size),
                state.applied.clone(),
                self.generation.begin(),
            )
        };

        let result = self.api.list_books(request, &filters).await;

        let mut state = self.state.write().await;
        if !self.generation.is_current(ticket) {
            debug!(page = request.page, "Discarding stale inventory response");
            return Ok(());
        }

        match result {
            Ok(page) => {
                info!(
                    page = page.pagination.current_page,
                    total = page.pagination.total_count,
                    "Inventory loaded"
                );
                state.books = page.books;
                state.pagination = page.pagination;
                state.load_state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!(page = request.page, error = %e, "Inventory load failed");
                state.load_state = LoadState::Failed(e.user_message());
                state.notice = Some(Notice::from_error(&e));
                Err(e)
            }
        }
    }

    /// Jump to `page` (clamped to at least 1) and load it.
    pub async fn go_to_page(&self, page: u64) -> AppResult<()> {
        self.state.write().await.page = page.max(1);
        self.load().await
    }

    /// Load the next page if there is one.
    pub async fn next_page(&self) -> AppResult<()> {
        let next = {
            let state = self.state.read().await;
            if !state.pagination.has_next {
                return Ok(());
            }
            state.pagination.current_page + 1
        };
        self.go_to_page(next).await
    }

    /// Load the previous page if there is one.
    pub async fn previous_page(&self) -> AppResult<()> {
        let previous = {
            let state = self.state.read().await;
            if !state.pagination.has_previous {
                return Ok(());
            }
            state.pagination.current_page - 1
        };
        self.go_to_page(previous).await
    }

    /// Replace the filters being edited. Nothing is fetched.
    pub async fn set_pending(&self, filters: BookFilters) {
        self.state.write().await.pending = filters;
    }

    /// Commit the pending filters, reset to page 1 and reload.
    pub async fn apply_filters(&self) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            state.applied = state.pending.clone();
            state.page = 1;
        }
        self.load().await
    }

    /// Empty both filter sets, reset to page 1 and reload.
    pub async fn clear_filters(&self) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            state.pending = BookFilters::default();
            state.applied = BookFilters::default();
            state.page = 1;
        }
        self.load().await
    }

    /// Tick one book. Ticking an already selected book changes nothing.
    pub async fn select(&self, id: BookId) {
        self.state.write().await.selection.insert(id);
    }

    /// Tick or untick one book. Returns whether it is selected afterwards.
    pub async fn toggle_selected(&self, id: BookId) -> bool {
        self.state.write().await.selection.toggle(id)
    }

    /// Toggle between the whole current page selected and nothing selected.
    pub async fn toggle_select_all(&self) {
        let mut state = self.state.write().await;
        let InventoryView {
            books, selection, ..
        } = &mut *state;
        selection.toggle_all(books.iter().map(|b| &b.id));
    }

    /// Delete every selected book after `confirm` approves the count.
    ///
    /// On success the deleted ids leave the selection and the current page
    /// is reloaded. A failed reload is recorded in the view state only; the
    /// books are gone either way.
    pub async fn bulk_delete<F>(&self, confirm: F) -> AppResult<DeleteOutcome>
    where
        F: FnOnce(usize) -> bool,
    {
        self.gate.require(self.role, Permission::DeleteBooks)?;

        let ids = self.state.read().await.selection.ids();
        if ids.is_empty() {
            return Ok(DeleteOutcome::NothingSelected);
        }
        if !confirm(ids.len()) {
            debug!(count = ids.len(), "Bulk delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let deleted = match self.api.delete_books(&ids).await {
            Ok(deleted) => deleted,
            Err(e) => {
                warn!(count = ids.len(), error = %e, "Bulk delete failed");
                self.state.write().await.notice = Some(Notice::from_error(&e));
                return Err(e);
            }
        };

        info!(requested = ids.len(), deleted, "Bulk delete completed");
        let outcome = DeleteOutcome::Deleted(deleted);
        {
            let mut state = self.state.write().await;
            state.selection.remove_all(&ids);
            state.notice = Some(Notice::success(outcome.message()));
        }

        if let Err(e) = self.load().await {
            warn!(error = %e, "Reload after bulk delete failed");
        }
        Ok(outcome)
    }
}
