//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles recognised by the role gate.
///
/// The backend enforces the same roles; the client only uses them to
/// decide which actions to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full system administrator.
    SystemAdmin,
    /// Administrator of an agent (reseller) organisation.
    AgentAdmin,
    /// Maintains the book catalog.
    InventoryManager,
    /// Prepares and sends quotations.
    SalesExecutive,
    /// Read-only account.
    User,
}

impl UserRole {
    /// All roles, most privileged first.
    pub const ALL: [UserRole; 5] = [
        Self::SystemAdmin,
        Self::AgentAdmin,
        Self::InventoryManager,
        Self::SalesExecutive,
        Self::User,
    ];

    /// Check if this role administers the system or an agent.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::SystemAdmin | Self::AgentAdmin)
    }

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemAdmin => "system_admin",
            Self::AgentAdmin => "agent_admin",
            Self::InventoryManager => "inventory_manager",
            Self::SalesExecutive => "sales_executive",
            Self::User => "user",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SystemAdmin => "System Admin",
            Self::AgentAdmin => "Agent Admin",
            Self::InventoryManager => "Inventory Manager",
            Self::SalesExecutive => "Sales Executive",
            Self::User => "User",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = bookdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system_admin" => Ok(Self::SystemAdmin),
            "agent_admin" => Ok(Self::AgentAdmin),
            "inventory_manager" => Ok(Self::InventoryManager),
            "sales_executive" => Ok(Self::SalesExecutive),
            "user" => Ok(Self::User),
            _ => Err(bookdesk_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: system_admin, agent_admin, \
                 inventory_manager, sales_executive, user"
            ))),
        }
    }
}
