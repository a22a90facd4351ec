//! Inbox controller.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use bookdesk_client::api::EmailApi;
use bookdesk_core::result::AppResult;
use bookdesk_entity::email::EmailMessage;
use bookdesk_entity::user::UserRole;

use crate::access::{Permission, RoleGate};
use crate::generation::RequestGeneration;
use crate::state::{LoadState, Notice};

/// Client-side inbox filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxFilter {
    /// Show only messages not yet opened.
    pub unread_only: bool,
    /// Case-insensitive text matched against subject and sender.
    pub search: String,
}

impl InboxFilter {
    /// Whether `message` passes the filter.
    pub fn accepts(&self, message: &EmailMessage) -> bool {
        (!self.unread_only || !message.read) && message.matches(&self.search)
    }
}

#[derive(Debug, Default)]
struct InboxState {
    messages: Vec<EmailMessage>,
    filter: InboxFilter,
    load_state: LoadState,
    notice: Option<Notice>,
}

/// Drives the inbox screen.
pub struct InboxController {
    api: Arc<dyn EmailApi>,
    gate: RoleGate,
    role: UserRole,
    state: RwLock<InboxState>,
    generation: RequestGeneration,
}

impl InboxController {
    /// Creates a new inbox controller.
    pub fn new(api: Arc<dyn EmailApi>, gate: RoleGate, role: UserRole) -> Self {
        Self {
            api,
            gate,
            role,
            state: RwLock::new(InboxState::default()),
            generation: RequestGeneration::new(),
        }
    }

    /// Fetch every message.
    pub async fn load(&self) -> AppResult<()> {
        self.gate.require(self.role, Permission::ViewInbox)?;

        let ticket = {
            let mut state = self.state.write().await;
            state.load_state = LoadState::Loading;
            self.generation.begin()
        };

        let result = self.api.list_emails().await;

        let mut state = self.state.write().await;
        if !self.generation.is_current(ticket) {
            debug!("Discarding stale inbox response");
            return Ok(());
        }

        match result {
            Ok(messages) => {
                info!(count = messages.len(), "Inbox loaded");
                state.messages = messages;
                state.load_state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Inbox load failed");
                state.load_state = LoadState::Failed(e.user_message());
                state.notice = Some(Notice::from_error(&e));
                Err(e)
            }
        }
    }

    /// Replace the filter.
    pub async fn set_filter(&self, filter: InboxFilter) {
        self.state.write().await.filter = filter;
    }

    /// Messages passing the filter, newest first.
    pub async fn visible(&self) -> Vec<EmailMessage> {
        let state = self.state.read().await;
        let mut visible: Vec<EmailMessage> = state
            .messages
            .iter()
            .filter(|m| state.filter.accepts(m))
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        visible
    }

    /// Number of unopened messages in the full set.
    pub async fn unread_count(&self) -> usize {
        self.state
            .read()
            .await
            .messages
            .iter()
            .filter(|m| !m.read)
            .count()
    }

    /// Lifecycle of the screen.
    pub async fn load_state(&self) -> LoadState {
        self.state.read().await.load_state.clone()
    }

    /// Remove and return the pending notification.
    pub async fn take_notice(&self) -> Option<Notice> {
        self.state.write().await.notice.take()
    }
}
