//! Core data types for the user system

use std::fmt;

use serde::{Deserialize, Serialize};

/// Privilege levels for registered users
///
/// The two levels form a total order, `User < Admin`. Variant declaration
/// order defines that order; the derived `Ord` relies on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    /// Default role assigned at registration; no access to stored records
    User,
    /// Full access to stored records
    Admin,
}

impl Role {
    /// Check if this role allows administrative operations
    pub fn can_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Check if reassigning this role to `requested` is allowed
    ///
    /// Assignments are monotonic non-decreasing: upgrades and same-role
    /// assignments succeed, downgrades are rejected.
    pub fn permits_assignment_to(&self, requested: Role) -> bool {
        requested >= *self
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

/// The authentication status of a user: not authenticated, or authenticated
/// with a password and device ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthenticationStatus {
    /// Initial status at registration
    #[default]
    NotAuthenticated,
    /// Both login factors matched at some point; there is no transition back
    Authenticated,
}

impl AuthenticationStatus {
    /// Check if this status grants authenticated access
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthenticationStatus::Authenticated)
    }
}

/// A single data record: an ordered sequence of integers, opaque to the authority.
pub type DataRecord = Vec<i64>;

/// Per-user state owned by the authority
///
/// The username is the key in the authority's user map and is not duplicated
/// here. Fields are crate-private; external access goes through the
/// authority's operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Login password, compared as an opaque string
    pub(crate) password: String,

    /// Device ID, the second login factor
    pub(crate) device_id: String,

    /// Assigned role; changes are monotonic non-decreasing
    pub(crate) role: Role,

    /// Authentication status, flipped once by a successful login
    pub(crate) status: AuthenticationStatus,

    /// Append-only record log, addressed by insertion index
    pub(crate) records: Vec<DataRecord>,
}

impl User {
    /// Create a freshly registered user: role `User`, not authenticated,
    /// empty record log.
    pub(crate) fn new(password: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            device_id: device_id.into(),
            role: Role::User,
            status: AuthenticationStatus::NotAuthenticated,
            records: Vec::new(),
        }
    }
}
