//! Inbox message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookdesk_core::types::{EmailId, QuotationId};

/// A message in the sales inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Message identifier.
    pub id: EmailId,
    /// Sender address.
    pub from: String,
    /// Recipient addresses.
    #[serde(default)]
    pub to: Vec<String>,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Short plain-text preview of the body.
    #[serde(default)]
    pub snippet: String,
    /// When the message arrived.
    pub received_at: DateTime<Utc>,
    /// Whether the message has been opened.
    #[serde(default)]
    pub read: bool,
    /// Quotation the thread belongs to, if any.
    #[serde(default)]
    pub quotation_id: Option<QuotationId>,
}

impl EmailMessage {
    /// Case-insensitive match on subject or sender.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.subject.to_lowercase().contains(&needle)
            || self.from.to_lowercase().contains(&needle)
    }
}
