//! # bookdesk-entity
//!
//! Domain entity models for BookDesk. Every struct in this crate mirrors a
//! resource returned by the backend API or a value object derived from one.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod book;
pub mod email;
pub mod quotation;
pub mod user;
