//! # bookdesk-client
//!
//! Typed client for the BookDesk REST API. [`ApiClient`] is the single
//! entry point used by the front-end; the traits in [`api`] are the seams
//! the controllers depend on, so tests can substitute in-memory fakes.
//!
//! ## Modules
//!
//! - `api`: async traits grouping the endpoints by resource
//! - `client`: the `reqwest`-backed implementation and token handling
//! - `dto`: wire-level request and response shapes
//! - `error`: HTTP status and transport error mapping
//! - `endpoints`: trait implementations for `ApiClient`

pub mod api;
pub mod client;
pub mod dto;
pub mod endpoints;
pub mod error;

pub use api::{AuthApi, BookApi, EmailApi, QuotationApi};
pub use client::ApiClient;
pub use dto::response::{BookPage, LoginResponse};
