//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use bookdesk_entity::user::UserRole;

/// An action the front-end offers only to some roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // Inventory
    /// Browse the book catalog.
    ViewInventory,
    /// Create and edit catalog entries.
    ManageInventory,
    /// Delete books from the catalog.
    DeleteBooks,
    /// Flag a book as out of print.
    MarkOutOfPrint,

    // Quotations
    /// Browse quotations.
    ViewQuotations,
    /// Create, edit and send quotations.
    ManageQuotations,

    // Inbox
    /// Read the shared inbox.
    ViewInbox,

    // Administration
    /// Open the admin panel.
    ViewAdminPanel,
    /// Create users and change their roles.
    ManageUsers,
}

impl Permission {
    /// All permissions.
    pub const ALL: [Permission; 9] = [
        Self::ViewInventory,
        Self::ManageInventory,
        Self::DeleteBooks,
        Self::MarkOutOfPrint,
        Self::ViewQuotations,
        Self::ManageQuotations,
        Self::ViewInbox,
        Self::ViewAdminPanel,
        Self::ManageUsers,
    ];

    /// Return the permission as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewInventory => "view_inventory",
            Self::ManageInventory => "manage_inventory",
            Self::DeleteBooks => "delete_books",
            Self::MarkOutOfPrint => "mark_out_of_print",
            Self::ViewQuotations => "view_quotations",
            Self::ManageQuotations => "manage_quotations",
            Self::ViewInbox => "view_inbox",
            Self::ViewAdminPanel => "view_admin_panel",
            Self::ManageUsers => "manage_users",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines the mapping from each role to its set of allowed permissions.
#[derive(Debug, Clone)]
pub struct RolePolicies {
    /// Role → set of permissions.
    policies: HashMap<UserRole, HashSet<Permission>>,
}

impl RolePolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        use Permission::*;

        let mut policies: HashMap<UserRole, HashSet<Permission>> = HashMap::new();

        // System admin: everything
        policies.insert(UserRole::SystemAdmin, Permission::ALL.into_iter().collect());

        // Agent admin: everything except user management
        policies.insert(
            UserRole::AgentAdmin,
            Permission::ALL
                .into_iter()
                .filter(|p| *p != ManageUsers)
                .collect(),
        );

        // Inventory manager: full catalog control, read-only quotations
        policies.insert(
            UserRole::InventoryManager,
            HashSet::from([
                ViewInventory,
                ManageInventory,
                DeleteBooks,
                MarkOutOfPrint,
                ViewQuotations,
                ViewInbox,
            ]),
        );

        // Sales executive: catalog lookup plus quotations
        policies.insert(
            UserRole::SalesExecutive,
            HashSet::from([ViewInventory, ViewQuotations, ManageQuotations, ViewInbox]),
        );

        // User: read-only catalog
        policies.insert(UserRole::User, HashSet::from([ViewInventory]));

        Self { policies }
    }

    /// Checks whether a role has a specific permission.
    pub fn has_permission(&self, role: UserRole, permission: Permission) -> bool {
        self.policies
            .get(&role)
            .is_some_and(|perms| perms.contains(&permission))
    }

    /// Returns the permissions of a role, sorted by declaration order.
    pub fn permissions_for(&self, role: UserRole) -> Vec<Permission> {
        Permission::ALL
            .into_iter()
            .filter(|p| self.has_permission(role, *p))
            .collect()
    }
}

impl Default for RolePolicies {
    fn default() -> Self {
        Self::new()
    }
}
