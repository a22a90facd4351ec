//! Query-string parameter building.

use serde::{Deserialize, Serialize};

/// An ordered list of query-string parameters.
///
/// Names are passed verbatim; values are always strings. Encoding is left
/// to the HTTP client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter unconditionally.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Append a parameter only when it carries a non-blank value.
    pub fn push_opt<V: ToString>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.trim().is_empty() {
                self.push(name, value);
            }
        }
    }

    /// Append every parameter of another list.
    pub fn extend(&mut self, other: QueryParams) {
        self.0.extend(other.0);
    }

    /// Look up the first value for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrow the pairs in insertion order.
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}
