//! Role gating: which management actions each role may perform.

pub mod gate;
pub mod policies;

pub use gate::RoleGate;
pub use policies::{Permission, RolePolicies};
