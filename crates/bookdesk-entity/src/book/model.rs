//! Book entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use bookdesk_core::isbn;
use bookdesk_core::types::{BookId, PublisherId};

use super::pricing::Pricing;

/// A catalog entry as returned by the API.
///
/// Instances are a snapshot of the last successful fetch and are never
/// mutated locally; a server round-trip replaces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique book identifier.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Publisher reference.
    #[serde(default)]
    pub publisher: Option<PublisherRef>,
    /// ISBN as stored by the backend (may contain separators).
    #[serde(default)]
    pub isbn: Option<String>,
    /// Library classification (subject code or shelf category).
    #[serde(default)]
    pub classification: Option<String>,
    /// Current list price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Availability status.
    #[serde(default)]
    pub status: BookStatus,
    /// Embedded pricing history, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Vec<Pricing>>,
    /// When the record was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Name of the publisher, if one is attached.
    pub fn publisher_name(&self) -> Option<&str> {
        self.publisher.as_ref().map(|p| p.name.as_str())
    }

    /// Whether the book has been marked out of print.
    pub fn is_out_of_print(&self) -> bool {
        self.status == BookStatus::OutOfPrint
    }

    /// Whether the stored ISBN passes checksum validation.
    pub fn has_valid_isbn(&self) -> bool {
        self.isbn.as_deref().is_some_and(isbn::validate_isbn)
    }
}

/// Lightweight publisher reference embedded in a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherRef {
    /// Publisher identifier.
    pub id: PublisherId,
    /// Publisher display name.
    pub name: String,
}

/// Availability status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// In print and orderable.
    #[default]
    Active,
    /// No longer printed by the publisher.
    OutOfPrint,
}

impl BookStatus {
    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OutOfPrint => "out_of_print",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
