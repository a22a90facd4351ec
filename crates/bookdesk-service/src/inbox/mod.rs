//! Sales inbox screen.

pub mod controller;

pub use controller::{InboxController, InboxFilter};
