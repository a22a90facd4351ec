//! Quotation domain entities.

pub mod model;
pub mod status;
pub mod summary;

pub use model::{CustomerRef, Quotation, QuotationEmail};
pub use status::QuotationStatus;
pub use summary::QuotationSummary;
