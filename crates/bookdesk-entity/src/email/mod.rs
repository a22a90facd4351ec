//! Inbox message entities.

pub mod model;

pub use model::EmailMessage;
