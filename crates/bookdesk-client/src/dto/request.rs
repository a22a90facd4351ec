//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use bookdesk_core::error::AppError;
use bookdesk_core::types::BookId;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password-reset email request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    /// Account email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
}

/// Password-reset submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// Token from the reset link.
    #[validate(length(min = 1, message = "Reset token is required"))]
    pub token: String,
    /// New password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// Batch delete body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkDeleteRequest {
    /// Books to delete.
    #[validate(length(min = 1, message = "Select at least one book"))]
    pub ids: Vec<BookId>,
}

/// Run `validator` checks and fold the first failure into an [`AppError`].
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| format!("Invalid request: {errors}"));
        AppError::validation(message)
    })
}
