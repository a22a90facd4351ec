//! Quotation controller.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use bookdesk_client::api::QuotationApi;
use bookdesk_core::result::AppResult;
use bookdesk_core::types::SortOrder;
use bookdesk_entity::quotation::{Quotation, QuotationSummary};
use bookdesk_entity::user::UserRole;

use crate::access::{Permission, RoleGate};
use crate::generation::RequestGeneration;
use crate::state::{LoadState, Notice};

/// Snapshot of the quotation screen.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuotationView {
    /// Every quotation of the last successful fetch, in fetch order.
    pub quotations: Vec<Quotation>,
    /// Search text matched against the quotation id.
    pub search: String,
    /// Sort by creation time.
    pub sort: SortOrder,
    /// Statistics over the full fetched set.
    pub summary: QuotationSummary,
    /// Lifecycle of the listing.
    pub load_state: LoadState,
    /// Notification raised by the last operation.
    pub notice: Option<Notice>,
}

impl QuotationView {
    /// Quotations matching the search, sorted by creation time.
    ///
    /// The sort is stable: quotations created at the same instant keep
    /// their fetch order.
    pub fn visible(&self) -> Vec<Quotation> {
        let mut visible: Vec<Quotation> = self
            .quotations
            .iter()
            .filter(|q| q.id_matches(&self.search))
            .cloned()
            .collect();

        if self.sort.is_ascending() {
            visible.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        } else {
            visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        visible
    }
}

/// Drives the quotation list screen.
///
/// The backend returns the whole set at once; searching and sorting
/// happen in memory and never trigger a fetch.
pub struct QuotationController {
    /// Quotation endpoints.
    api: Arc<dyn QuotationApi>,
    /// Role gate.
    gate: RoleGate,
    /// Role of the signed-in operator.
    role: UserRole,
    /// Screen state.
    state: RwLock<QuotationView>,
    /// Stale-response guard.
    generation: RequestGeneration,
}

impl QuotationController {
    /// Creates a new quotation controller with the given initial sort.
    pub fn new(api: Arc<dyn QuotationApi>, gate: RoleGate, role: UserRole, sort: SortOrder) -> Self {
        Self {
            api,
            gate,
            role,
            state: RwLock::new(QuotationView {
                sort,
                ..Default::default()
            }),
            generation: RequestGeneration::new(),
        }
    }

    /// A copy of the current screen state.
    pub async fn view(&self) -> QuotationView {
        self.state.read().await.clone()
    }

    /// Remove and return the pending notification.
    pub async fn take_notice(&self) -> Option<Notice> {
        self.state.write().await.notice.take()
    }

    /// Fetch the full quotation set and recompute the summary.
    pub async fn load(&self) -> AppResult<()> {
        self.gate.require(self.role, Permission::ViewQuotations)?;

        let ticket = {
            let mut state = self.state.write().await;
            state.load_state = LoadState::Loading;
            self.generation.begin()
        };

        let result = self.api.list_quotations().await;

        let mut state = self.state.write().await;
        if !self.generation.is_current(ticket) {
            debug!("Discarding stale quotation response");
            return Ok(());
        }

        match result {
            Ok(quotations) => {
                state.summary = QuotationSummary::from_quotations(&quotations);
                state.quotations = quotations;
                state.load_state = LoadState::Ready;
                info!(count = state.summary.total_count, "Quotations loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Quotation load failed");
                state.load_state = LoadState::Failed(e.user_message());
                state.notice = Some(Notice::from_error(&e));
                Err(e)
            }
        }
    }

    /// Set the id search text.
    pub async fn set_search(&self, search: impl Into<String>) {
        self.state.write().await.search = search.into();
    }

    /// Set the creation-time sort order.
    pub async fn set_sort(&self, sort: SortOrder) {
        self.state.write().await.sort = sort;
    }

    /// Quotations matching the current search, in the current order.
    pub async fn visible(&self) -> Vec<Quotation> {
        self.state.read().await.visible()
    }

    /// Statistics over the last fetched set.
    pub async fn summary(&self) -> QuotationSummary {
        self.state.read().await.summary.clone()
    }
}
