//! Book domain entities.

pub mod filter;
pub mod model;
pub mod pricing;

pub use filter::BookFilters;
pub use model::{Book, BookStatus, PublisherRef};
pub use pricing::{BookStatistics, Pricing};
