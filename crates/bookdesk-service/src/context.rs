//! Signed-in session carrying the bearer token and the current account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookdesk_core::types::UserId;
use bookdesk_entity::user::{User, UserRole};

/// The authenticated session of the operator.
///
/// Produced by [`AuthService::login`](crate::AuthService::login) and read by
/// every controller that gates actions on the operator's role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued by the backend.
    pub token: String,
    /// The signed-in account.
    pub user: User,
    /// When the session was established locally.
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session.
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user,
            started_at: Utc::now(),
        }
    }

    /// The account identifier.
    pub fn user_id(&self) -> &UserId {
        &self.user.id
    }

    /// The account role.
    pub fn role(&self) -> UserRole {
        self.user.role
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}
