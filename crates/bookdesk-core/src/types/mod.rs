//! Core type definitions used across the BookDesk workspace.

pub mod id;
pub mod pagination;
pub mod query;
pub mod sorting;

pub use id::*;
pub use pagination::{PageRequest, PaginationData};
pub use query::QueryParams;
pub use sorting::SortOrder;
