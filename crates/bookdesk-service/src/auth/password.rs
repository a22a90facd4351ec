//! Password policy enforcement for new passwords.

use bookdesk_core::error::AppError;

/// Minimum length accepted by the backend.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validates password strength before a reset is submitted.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy with the given minimum length.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Validates a password against all rules.
    ///
    /// Returns an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(AppError::validation(
                "Password must contain at least one uppercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(AppError::validation(
                "Password must contain at least one lowercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }

        Ok(())
    }

    /// Validates that both entries of the form agree.
    pub fn validate_confirmation(&self, password: &str, confirm: &str) -> Result<(), AppError> {
        if password != confirm {
            return Err(AppError::validation("Passwords do not match"));
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(MIN_PASSWORD_LENGTH)
    }
}
