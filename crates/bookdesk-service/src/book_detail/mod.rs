//! Single-book screen: book record, pricing history and statistics.

pub mod controller;

pub use controller::{BookDetail, BookDetailController};
