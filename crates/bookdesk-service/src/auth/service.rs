//! Sign-in and session restoration.

use std::sync::Arc;

use tracing::{info, warn};

use bookdesk_client::api::AuthApi;
use bookdesk_core::error::AppError;
use bookdesk_core::result::AppResult;

use crate::context::Session;

/// Establishes the operator's session.
pub struct AuthService {
    /// Auth endpoints.
    api: Arc<dyn AuthApi>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self { api }
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        match self.api.login(email, password).await {
            Ok(response) => {
                info!(user_id = %response.user.id, role = %response.user.role, "Session established");
                Ok(Session::new(response.token, response.user))
            }
            Err(e) => {
                warn!(error = %e, "Sign-in failed");
                Err(e)
            }
        }
    }

    /// Rebuild the session of the token the client currently sends.
    pub async fn resume(&self) -> AppResult<Session> {
        let token = self
            .api
            .session_token()
            .ok_or_else(|| AppError::authentication("Not signed in"))?;
        let user = self.api.current_user().await?;
        Ok(Session::new(token, user))
    }
}
