//! Forgotten-password and reset-password flow.

use std::sync::Arc;

use tracing::{info, warn};

use bookdesk_client::api::AuthApi;
use bookdesk_core::error::{AppError, ErrorKind};
use bookdesk_core::result::AppResult;

use super::password::PasswordPolicy;

/// Where the operator is sent when a reset link cannot be used.
pub const RECOVERY_START: &str = "/forgot-password";

/// What the reset screen shows for a given link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetPage {
    /// The token looks usable; show the new-password form.
    Form {
        /// The reset token.
        token: String,
    },
    /// Leave the screen immediately.
    Redirect(&'static str),
}

/// Result of submitting the new-password form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The password was changed.
    Completed,
    /// The backend rejected the token; restart recovery.
    Redirect(&'static str),
}

/// Password recovery screens.
pub struct RecoveryFlow {
    /// Auth endpoints.
    api: Arc<dyn AuthApi>,
    /// New-password rules.
    policy: PasswordPolicy,
}

impl RecoveryFlow {
    /// Creates a recovery flow with the default password policy.
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            api,
            policy: PasswordPolicy::default(),
        }
    }

    /// Decide what the reset screen shows for the token carried by the link.
    ///
    /// A missing, blank or malformed token redirects to [`RECOVERY_START`].
    pub fn open_reset(&self, token: Option<&str>) -> ResetPage {
        match token.map(str::trim) {
            Some(token) if is_well_formed(token) => ResetPage::Form {
                token: token.to_string(),
            },
            _ => ResetPage::Redirect(RECOVERY_START),
        }
    }

    /// Ask the backend to email a reset link.
    ///
    /// Returns the confirmation text to show; it never reveals whether the
    /// address has an account.
    pub async fn request_reset(&self, email: &str) -> AppResult<String> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        self.api.request_password_reset(email).await?;
        info!("Password reset requested");
        Ok("If an account exists for that address, a reset link has been sent.".to_string())
    }

    /// Submit the new password.
    ///
    /// Policy and confirmation failures are returned as validation errors
    /// and nothing is sent. A token the backend rejects yields
    /// [`ResetOutcome::Redirect`].
    pub async fn submit_reset(
        &self,
        token: &str,
        password: &str,
        confirm: &str,
    ) -> AppResult<ResetOutcome> {
        let ResetPage::Form { token } = self.open_reset(Some(token)) else {
            return Ok(ResetOutcome::Redirect(RECOVERY_START));
        };

        self.policy.validate(password)?;
        self.policy.validate_confirmation(password, confirm)?;

        match self.api.reset_password(&token, password).await {
            Ok(()) => {
                info!("Password reset completed");
                Ok(ResetOutcome::Completed)
            }
            Err(e) if token_rejected(&e) => {
                warn!(error = %e, "Reset token rejected");
                Ok(ResetOutcome::Redirect(RECOVERY_START))
            }
            Err(e) => Err(e),
        }
    }
}

fn is_well_formed(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn token_rejected(err: &AppError) -> bool {
    matches!(
        err.kind,
        ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::Authentication
    )
}
