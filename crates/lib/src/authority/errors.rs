//! Error types for the authority component.
//!
//! Every operation on the authority reports failure through one structured
//! error kind carrying the offending identifier(s). Errors are terminal
//! outcomes of a single call: nothing is retried or recovered internally, and
//! a failing operation leaves no partial state change behind.

use thiserror::Error as ThisError;

use crate::Error;
use crate::user::Role;

/// Errors that can occur during authority operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum AuthorityError {
    /// Registration was attempted with a username that is already taken.
    #[error("Username already exists: {username}")]
    UsernameAlreadyExists {
        /// The username that is already registered
        username: String,
    },

    /// The username does not meet the format requirements.
    #[error("Invalid username: {username}")]
    InvalidUsername {
        /// The rejected username
        username: String,
    },

    /// The password does not meet the format requirements.
    ///
    /// The rejected password is carried for the caller's presentation layer
    /// but is not echoed by the `Display` impl.
    #[error("Invalid password")]
    InvalidPassword {
        /// The rejected password
        password: String,
    },

    /// The device ID does not meet the format requirements.
    #[error("Invalid device ID: {device_id}")]
    InvalidDeviceId {
        /// The rejected device ID
        device_id: String,
    },

    /// The named user is not registered.
    #[error("User not found: {username}")]
    UserNotFound {
        /// The username that was not found
        username: String,
    },

    /// The given password does not match the one stored for the user.
    #[error("Incorrect password for user {username}")]
    IncorrectPassword {
        /// The user whose login was attempted
        username: String,
        /// The password that did not match
        password: String,
    },

    /// The given device ID does not match the one stored for the user.
    #[error("Incorrect device ID for user {username}: {device_id}")]
    IncorrectDeviceId {
        /// The user whose login was attempted
        username: String,
        /// The device ID that did not match
        device_id: String,
    },

    /// A role assignment would decrease the user's privilege.
    #[error("Role downgrade from {current} to {requested} is not allowed")]
    RoleDowngrade {
        /// The user's current role
        current: Role,
        /// The rejected lower role
        requested: Role,
    },

    /// The user has never completed a successful login.
    #[error("User is not authenticated: {username}")]
    NotAuthenticated {
        /// The unauthenticated user
        username: String,
    },

    /// The user is authenticated but lacks the required role.
    #[error("Permission denied for user: {username}")]
    PermissionDenied {
        /// The user lacking access rights
        username: String,
    },

    /// The requested record index is outside the user's record log.
    #[error("Record index {index} out of bounds for log of length {len}")]
    RecordIndexOutOfBounds {
        /// The requested zero-based index
        index: usize,
        /// The length of the record log
        len: usize,
    },
}

impl AuthorityError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AuthorityError::UserNotFound { .. })
    }

    /// Check if this error indicates a username conflict.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, AuthorityError::UsernameAlreadyExists { .. })
    }

    /// Check if this error indicates a credential failed format validation.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AuthorityError::InvalidUsername { .. }
                | AuthorityError::InvalidPassword { .. }
                | AuthorityError::InvalidDeviceId { .. }
        )
    }

    /// Check if this error indicates a login factor did not match.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            AuthorityError::IncorrectPassword { .. } | AuthorityError::IncorrectDeviceId { .. }
        )
    }

    /// Check if this error indicates access was denied.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            AuthorityError::NotAuthenticated { .. }
                | AuthorityError::PermissionDenied { .. }
                | AuthorityError::RoleDowngrade { .. }
        )
    }

    /// Get the username this error is about, if it carries one.
    pub fn username(&self) -> Option<&str> {
        match self {
            AuthorityError::UsernameAlreadyExists { username }
            | AuthorityError::InvalidUsername { username }
            | AuthorityError::UserNotFound { username }
            | AuthorityError::IncorrectPassword { username, .. }
            | AuthorityError::IncorrectDeviceId { username, .. }
            | AuthorityError::NotAuthenticated { username }
            | AuthorityError::PermissionDenied { username } => Some(username),
            _ => None,
        }
    }
}

// Conversion from AuthorityError to the main Error type
impl From<AuthorityError> for Error {
    fn from(err: AuthorityError) -> Self {
        Error::Authority(err)
    }
}
