//! User entity model.

use serde::{Deserialize, Serialize};

use bookdesk_core::types::UserId;

use super::role::UserRole;

/// The signed-in account as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Role used for gating.
    pub role: UserRole,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
