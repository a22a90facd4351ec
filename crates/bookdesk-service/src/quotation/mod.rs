//! Quotation list screen: full-set fetch, client-side search and sort,
//! and summary statistics.

pub mod controller;

pub use controller::{QuotationController, QuotationView};
