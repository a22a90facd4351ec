//! Inventory and quotation listing configuration.

use serde::{Deserialize, Serialize};

/// Listing behaviour shared by the inventory and quotation views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Fixed number of books requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Initial quotation ordering: `"newest"` or `"oldest"`.
    #[serde(default = "default_quotation_sort")]
    pub quotation_sort: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            quotation_sort: default_quotation_sort(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_quotation_sort() -> String {
    "newest".to_string()
}
