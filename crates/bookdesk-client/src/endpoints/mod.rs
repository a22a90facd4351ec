//! [`ApiClient`](crate::ApiClient) implementations of the resource traits.

pub mod auth;
pub mod books;
pub mod emails;
pub mod quotations;
