//! User model for the warden authority
//!
//! Defines the per-user state (credentials, role, authentication status,
//! record log) and the credential format rules enforced at registration.

pub mod types;
pub mod validation;

pub use types::*;
