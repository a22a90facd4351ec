//! Convenience result type alias for BookDesk.

use crate::error::AppError;

/// A specialized `Result` type for BookDesk operations.
pub type AppResult<T> = Result<T, AppError>;
