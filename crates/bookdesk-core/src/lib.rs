//! # bookdesk-core
//!
//! Core crate for BookDesk. Contains configuration schemas, typed
//! identifiers, pagination/sorting/query types, the ISBN validator,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other BookDesk crates.

pub mod config;
pub mod error;
pub mod isbn;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
