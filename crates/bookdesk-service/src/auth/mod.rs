//! Sign-in and password recovery.

pub mod password;
pub mod recovery;
pub mod service;

pub use password::PasswordPolicy;
pub use recovery::{RECOVERY_START, RecoveryFlow, ResetOutcome, ResetPage};
pub use service::AuthService;
