//! Quotation entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bookdesk_core::types::{CustomerId, QuotationId};

use super::status::QuotationStatus;

/// A sales quotation as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// Quotation identifier, also its human-facing reference.
    pub id: QuotationId,
    /// Customer the quotation is addressed to.
    pub customer: CustomerRef,
    /// Sum of line totals before discount.
    #[serde(default)]
    pub subtotal: Decimal,
    /// Discount amount.
    #[serde(default)]
    pub discount: Decimal,
    /// Amount payable.
    pub total: Decimal,
    /// Current status.
    pub status: QuotationStatus,
    /// Last day the quoted prices are honoured.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    /// When the quotation was created.
    pub created_at: DateTime<Utc>,
    /// Delivery metadata once the quotation has been emailed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<QuotationEmail>,
}

impl Quotation {
    /// Whether the validity date lies before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_until.is_some_and(|d| d < today)
    }

    /// Case-insensitive substring match on the quotation identifier.
    pub fn id_matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        needle.is_empty()
            || self
                .id
                .as_str()
                .to_lowercase()
                .contains(&needle.to_lowercase())
    }
}

/// Customer reference embedded in a quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    /// Customer identifier.
    pub id: CustomerId,
    /// Customer display name.
    pub name: String,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Email delivery metadata of a sent quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationEmail {
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// When the email was sent.
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}
