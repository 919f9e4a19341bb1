//!
//! Warden: an in-process identity and access-control authority.
//! This library provides a single component that owns all user state and
//! enforces every validation rule, authentication transition, and
//! access-control decision.
//!
//! ## Core Concepts
//!
//! Warden is built around a small set of concepts:
//!
//! * **Authority (`authority::Authority`)**: The single source of truth for users,
//!   credentials, roles, authentication status, and stored data records. All
//!   operations are methods on this one component.
//! * **User (`user::User`)**: Per-user state keyed by a unique, immutable username:
//!   password, device ID, role, authentication status, and an append-only record log.
//! * **Role (`user::Role`)**: A two-level privilege order, `User < Admin`.
//!   Role assignments may never decrease privilege.
//! * **Two-factor login**: Authentication requires the stored password and the
//!   stored device ID to both match. A successful login flips the user's
//!   status to `Authenticated`; there is no transition back.
//! * **Record log (`user::DataRecord`)**: Ordered integer sequences appended per
//!   user and addressed by zero-based insertion index, readable only by
//!   authenticated admins.
//!
//! State lives entirely in memory for the lifetime of the `Authority` instance;
//! there is no persistence, network surface, or session layer.

pub mod authority;
pub mod constants;
pub mod user;

/// Re-export the `Authority` component for easier access.
pub use authority::Authority;

/// Result type used throughout the warden library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the warden library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from the authority component
    #[error(transparent)]
    Authority(authority::AuthorityError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Authority(_) => "authority",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Authority(err) => err.is_not_found(),
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Authority(err) => err.is_already_exists(),
        }
    }

    /// Check if this error indicates permission was denied.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::Authority(err) => err.is_permission_denied(),
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Authority(err) => err.is_validation_error(),
        }
    }

    /// Check if this error indicates a credential mismatch at login.
    pub fn is_credential_error(&self) -> bool {
        match self {
            Error::Authority(err) => err.is_credential_error(),
        }
    }
}
