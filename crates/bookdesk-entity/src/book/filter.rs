//! Server-side book filter predicate.

use serde::{Deserialize, Serialize};

use bookdesk_core::types::QueryParams;

/// Optional partial predicate over book fields, applied by the backend.
///
/// Only fields carrying a non-blank value are sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFilters {
    /// Title substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// ISBN (raw input; the backend normalizes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Classification code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    /// Publisher name substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
}

impl BookFilters {
    /// Whether no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.to_query_params().is_empty()
    }

    /// Encode the non-blank fields as query parameters, names verbatim.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("title", self.title.as_deref());
        params.push_opt("author", self.author.as_deref());
        params.push_opt("isbn", self.isbn.as_deref());
        params.push_opt("year", self.year.filter(|y| *y != 0));
        params.push_opt("classification", self.classification.as_deref());
        params.push_opt("publisher_name", self.publisher_name.as_deref());
        params
    }
}
