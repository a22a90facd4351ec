//! Pricing history and book statistics.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bookdesk_core::types::PricingId;

/// One entry in a book's read-only pricing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    /// Entry identifier.
    pub id: PricingId,
    /// Rate charged per copy.
    pub rate: Decimal,
    /// Discount percentage applied to the rate.
    #[serde(default)]
    pub discount: Decimal,
    /// Where the price came from (publisher list, distributor, manual).
    #[serde(default)]
    pub source: Option<String>,
    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// When the price was recorded.
    pub created_at: DateTime<Utc>,
}

impl Pricing {
    /// Rate after the percentage discount.
    pub fn net_rate(&self) -> Decimal {
        self.rate - self.rate * self.discount / Decimal::ONE_HUNDRED
    }
}

/// Lightweight usage statistics for a single book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookStatistics {
    /// Number of quotations that include the book.
    #[serde(default)]
    pub total_quotations: u64,
    /// Copies quoted across all quotations.
    #[serde(default)]
    pub total_quantity: u64,
    /// Most recent quotation including the book.
    #[serde(default)]
    pub last_quoted_at: Option<DateTime<Utc>>,
}

fn default_currency() -> String {
    "USD".to_string()
}
