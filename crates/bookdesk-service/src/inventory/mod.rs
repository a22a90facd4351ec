//! Book inventory screen: server-paginated listing, filters, selection,
//! and batch deletion.

pub mod controller;
pub mod selection;

pub use controller::{DeleteOutcome, InventoryController, InventoryView};
pub use selection::Selection;
