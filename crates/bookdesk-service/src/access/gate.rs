//! Role gate enforcement: checks whether a role holds a permission.

use bookdesk_core::error::AppError;
use bookdesk_entity::user::UserRole;

use super::policies::{Permission, RolePolicies};

/// Decides which actions are offered to the current role.
///
/// The backend enforces the same rules; the gate only keeps the client from
/// issuing requests that are bound to be rejected.
#[derive(Debug, Clone, Default)]
pub struct RoleGate {
    /// The policy configuration.
    policies: RolePolicies,
}

impl RoleGate {
    /// Creates a new gate with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RolePolicies::new(),
        }
    }

    /// Returns `Ok(())` if `role` holds `permission`, an authorization error otherwise.
    pub fn require(&self, role: UserRole, permission: Permission) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' does not have permission '{permission}'"
            )))
        }
    }

    /// Checks whether the role holds the permission (returns bool).
    pub fn allows(&self, role: UserRole, permission: Permission) -> bool {
        self.policies.has_permission(role, permission)
    }

    /// Returns a reference to the underlying policies.
    pub fn policies(&self) -> &RolePolicies {
        &self.policies
    }
}
