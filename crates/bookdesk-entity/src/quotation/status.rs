//! Quotation status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a quotation.
///
/// Transitions happen on the server; the client only reads the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    /// Being prepared, not yet sent.
    Draft,
    /// Sent to the customer, awaiting an answer.
    Sent,
    /// Accepted by the customer.
    Accepted,
    /// Rejected by the customer.
    Rejected,
}

impl QuotationStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [QuotationStatus; 4] = [Self::Draft, Self::Sent, Self::Accepted, Self::Rejected];

    /// Check if the quotation still awaits a customer decision.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Draft | Self::Sent)
    }

    /// Check if the quotation has reached a terminal state.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuotationStatus {
    type Err = bookdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "sent" => Ok(Self::Sent),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(bookdesk_core::AppError::validation(format!(
                "Invalid quotation status: '{s}'. Expected one of: draft, sent, accepted, rejected"
            ))),
        }
    }
}
