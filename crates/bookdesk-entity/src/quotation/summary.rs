//! Aggregate statistics over a quotation set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::Quotation;
use super::status::QuotationStatus;

/// Totals recomputed from the fetched quotation set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationSummary {
    /// Number of quotations.
    pub total_count: u64,
    /// Sum of quotation totals.
    pub total_value: Decimal,
    /// Quotations in draft.
    pub draft: u64,
    /// Quotations sent.
    pub sent: u64,
    /// Quotations accepted.
    pub accepted: u64,
    /// Quotations rejected.
    pub rejected: u64,
}

impl QuotationSummary {
    /// Build the summary from a full quotation set.
    pub fn from_quotations(quotations: &[Quotation]) -> Self {
        quotations.iter().fold(Self::default(), |mut acc, q| {
            acc.total_count += 1;
            acc.total_value += q.total;
            match q.status {
                QuotationStatus::Draft => acc.draft += 1,
                QuotationStatus::Sent => acc.sent += 1,
                QuotationStatus::Accepted => acc.accepted += 1,
                QuotationStatus::Rejected => acc.rejected += 1,
            }
            acc
        })
    }

    /// Count for one status.
    pub fn count(&self, status: QuotationStatus) -> u64 {
        match status {
            QuotationStatus::Draft => self.draft,
            QuotationStatus::Sent => self.sent,
            QuotationStatus::Accepted => self.accepted,
            QuotationStatus::Rejected => self.rejected,
        }
    }

    /// Accepted share of decided quotations, in percent.
    pub fn acceptance_rate(&self) -> Option<Decimal> {
        let decided = self.accepted + self.rejected;
        if decided == 0 {
            return None;
        }
        Some(Decimal::from(self.accepted) * Decimal::ONE_HUNDRED / Decimal::from(decided))
    }
}
