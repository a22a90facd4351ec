//! # bookdesk-service
//!
//! Front-end controllers for BookDesk. Each controller owns the view state
//! of one screen (items, filters, selection, load state) and talks to the
//! backend exclusively through the `bookdesk-client` API traits.
//!
//! Controllers follow constructor injection: API implementations are
//! provided at construction time as `Arc<dyn ...>` so tests can substitute
//! in-memory fakes. State lives behind a `tokio::sync::RwLock`, so every
//! operation takes `&self` and a controller can be shared between tasks.

pub mod access;
pub mod auth;
pub mod book_detail;
pub mod context;
pub mod generation;
pub mod inbox;
pub mod inventory;
pub mod quotation;
pub mod state;

pub use access::{Permission, RoleGate, RolePolicies};
pub use auth::{AuthService, PasswordPolicy, RECOVERY_START, RecoveryFlow, ResetOutcome, ResetPage};
pub use book_detail::{BookDetail, BookDetailController};
pub use context::Session;
pub use generation::RequestGeneration;
pub use inbox::{InboxController, InboxFilter};
pub use inventory::{DeleteOutcome, InventoryController, InventoryView};
pub use quotation::{QuotationController, QuotationView};
pub use state::{LoadState, Notice, NoticeLevel};

#[cfg(test)]
pub(crate) mod testing;
