//!
//! Provides the `Authority`, the single owner of all user state.
//!
//! Every operation (registration, login, role assignment, record append,
//! record retrieval, and the read-only queries) is a method on `Authority`.
//! There is no sub-component split: the value of the component is the fixed
//! ordering and interaction of its validation and access-control rules.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

use crate::{
    Result,
    user::{
        AuthenticationStatus, DataRecord, Role, User,
        validation::{is_valid_device_id, is_valid_password, is_valid_username},
    },
};

pub mod errors;

pub use errors::AuthorityError;


/// Internal state for Authority
///
/// Holds the one user map. Authority itself is a cheap-to-clone handle
/// wrapping `Arc<Mutex<AuthorityState>>`; the single lock serializes every
/// operation, so each check-then-mutate sequence is atomic from the caller's
/// perspective.
#[derive(Debug, Default)]
pub(crate) struct AuthorityState {
    /// All registered users, keyed by username
    users: HashMap<String, User>,
}

impl AuthorityState {
    fn user(&self, username: &str) -> Result<&User> {
        self.users.get(username).ok_or_else(|| {
            AuthorityError::UserNotFound {
                username: username.to_string(),
            }
            .into()
        })
    }

    fn user_mut(&mut self, username: &str) -> Result<&mut User> {
        self.users.get_mut(username).ok_or_else(|| {
            AuthorityError::UserNotFound {
                username: username.to_string(),
            }
            .into()
        })
    }
}

/// The identity and access-control authority.
///
/// Registers users under validated credentials, authenticates them via a
/// two-factor (password + device ID) check, assigns roles, and gates access
/// to per-user records by authentication status and role.
///
/// Usernames are unique and immutable; there is no deletion operation, so a
/// registered user persists for the life of the instance. Authentication is a
/// per-user flag with no logout, and role assignments never decrease
/// privilege.
///
/// Authority is a cheap-to-clone handle; clones share the same state.
///
/// ## Example
///
/// ```
/// use warden::{Authority, user::Role};
///
/// # fn main() -> warden::Result<()> {
/// let authority = Authority::new();
/// authority.register("Alice", "Passw0rd!", "1234")?;
/// authority.login("Alice", "Passw0rd!", "1234")?;
/// authority.assign_role("Alice", Role::Admin)?;
///
/// authority.add_data("Alice", vec![1, 2, 3])?;
/// assert_eq!(authority.get_data("Alice", 0)?, vec![1, 2, 3]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Authority {
    inner: Arc<Mutex<AuthorityState>>,
}

impl fmt::Debug for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock().unwrap();
        f.debug_struct("Authority")
            .field("users", &format!("<{} registered>", state.users.len()))
            .finish()
    }
}

impl Authority {
    /// Create a new authority with no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// The user starts out not authenticated, with the default `User` role
    /// and an empty record log.
    ///
    /// Checks run in a fixed order and the first failing check wins:
    ///
    /// 1. The username must not already be registered.
    /// 2. The username must be valid (see [`is_valid_username`]).
    /// 3. The password must be valid (see [`is_valid_password`]).
    /// 4. The device ID must be valid (see [`is_valid_device_id`]).
    ///
    /// A failing call leaves no trace of the attempted registration.
    ///
    /// # Errors
    /// [`AuthorityError::UsernameAlreadyExists`],
    /// [`AuthorityError::InvalidUsername`], [`AuthorityError::InvalidPassword`],
    /// or [`AuthorityError::InvalidDeviceId`], in that precedence order.
    pub fn register(&self, username: &str, password: &str, device_id: &str) -> Result<()> {
        let mut state = self.inner.lock().unwrap();

        // Existing usernames are all valid, so the duplicate check comes first
        if state.users.contains_key(username) {
            return Err(AuthorityError::UsernameAlreadyExists {
                username: username.to_string(),
            }
            .into());
        }
        if !is_valid_username(username) {
            return Err(AuthorityError::InvalidUsername {
                username: username.to_string(),
            }
            .into());
        }
        if !is_valid_password(password) {
            return Err(AuthorityError::InvalidPassword {
                password: password.to_string(),
            }
            .into());
        }
        if !is_valid_device_id(device_id) {
            return Err(AuthorityError::InvalidDeviceId {
                device_id: device_id.to_string(),
            }
            .into());
        }

        state
            .users
            .insert(username.to_string(), User::new(password, device_id));
        tracing::debug!(username = %username, "registered user");
        Ok(())
    }

    /// Log a user in and return their authentication status.
    ///
    /// Inputs are compared against the stored credentials; their format is
    /// not re-validated here. Checks run in a fixed order:
    ///
    /// 1. The username must be registered.
    /// 2. The password must match; the device ID is not consulted otherwise.
    /// 3. The device ID must match.
    ///
    /// When all three hold the user becomes authenticated (idempotently, if a
    /// previous login already succeeded) and the stored status is returned,
    /// which on this path is always [`AuthenticationStatus::Authenticated`].
    /// A failing call leaves the user's status untouched.
    ///
    /// # Errors
    /// [`AuthorityError::UserNotFound`], [`AuthorityError::IncorrectPassword`],
    /// or [`AuthorityError::IncorrectDeviceId`], in that precedence order.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        device_id: &str,
    ) -> Result<AuthenticationStatus> {
        let mut state = self.inner.lock().unwrap();
        let user = state.user_mut(username)?;

        if user.password != password {
            return Err(AuthorityError::IncorrectPassword {
                username: username.to_string(),
                password: password.to_string(),
            }
            .into());
        }
        if user.device_id != device_id {
            return Err(AuthorityError::IncorrectDeviceId {
                username: username.to_string(),
                device_id: device_id.to_string(),
            }
            .into());
        }

        user.status = AuthenticationStatus::Authenticated;
        tracing::debug!(username = %username, "user authenticated");
        Ok(user.status)
    }

    /// Assign a role to an existing user.
    ///
    /// Intended for a privileged operator: neither the password nor the
    /// device ID is required, and no authentication or caller-role check is
    /// performed. Assignments are monotonic non-decreasing; upgrading
    /// `User` to `Admin` or reassigning the current role succeeds, while a
    /// downgrade is rejected and leaves the role unchanged. The user's
    /// authentication status is unaffected either way.
    ///
    /// # Errors
    /// [`AuthorityError::UserNotFound`] if the username is not registered,
    /// [`AuthorityError::RoleDowngrade`] if the assignment would decrease
    /// privilege.
    pub fn assign_role(&self, username: &str, role: Role) -> Result<()> {
        let mut state = self.inner.lock().unwrap();
        let user = state.user_mut(username)?;

        if !user.role.permits_assignment_to(role) {
            return Err(AuthorityError::RoleDowngrade {
                current: user.role,
                requested: role,
            }
            .into());
        }

        user.role = role;
        tracing::info!(username = %username, role = %role, "role assigned");
        Ok(())
    }

    /// Append a record to the end of a user's record log.
    ///
    /// Intended for a privileged operator: no authentication or role check
    /// is performed. Records are kept in call order and addressed by
    /// zero-based insertion index.
    ///
    /// # Errors
    /// [`AuthorityError::UserNotFound`] if the username is not registered.
    pub fn add_data(&self, username: &str, record: DataRecord) -> Result<()> {
        let mut state = self.inner.lock().unwrap();
        let user = state.user_mut(username)?;

        user.records.push(record);
        tracing::debug!(username = %username, records = user.records.len(), "record appended");
        Ok(())
    }

    /// Retrieve the record at `index` from a user's record log.
    ///
    /// Access requires the user to be registered, authenticated, and an
    /// admin, checked in that order before the index is considered. The
    /// returned record is a copy; mutating it cannot corrupt the stored log.
    ///
    /// # Errors
    /// [`AuthorityError::UserNotFound`], [`AuthorityError::NotAuthenticated`],
    /// [`AuthorityError::PermissionDenied`], or
    /// [`AuthorityError::RecordIndexOutOfBounds`], in that precedence order.
    pub fn get_data(&self, username: &str, index: usize) -> Result<DataRecord> {
        let state = self.inner.lock().unwrap();
        let user = state.user(username)?;

        if !user.status.is_authenticated() {
            return Err(AuthorityError::NotAuthenticated {
                username: username.to_string(),
            }
            .into());
        }
        if !user.role.can_admin() {
            return Err(AuthorityError::PermissionDenied {
                username: username.to_string(),
            }
            .into());
        }

        user.records.get(index).cloned().ok_or_else(|| {
            AuthorityError::RecordIndexOutOfBounds {
                index,
                len: user.records.len(),
            }
            .into()
        })
    }

    // === Read-only queries ===
    //
    // Pure reads with no side effects and no ordering constraints with each
    // other.

    /// Check if a user with the given username is registered.
    pub fn is_user(&self, username: &str) -> bool {
        self.inner.lock().unwrap().users.contains_key(username)
    }

    /// Check if the user with the given username is authenticated.
    ///
    /// # Errors
    /// [`AuthorityError::UserNotFound`] if the username is not registered.
    pub fn is_authenticated(&self, username: &str) -> Result<bool> {
        let state = self.inner.lock().unwrap();
        Ok(state.user(username)?.status.is_authenticated())
    }

    /// Get the role assigned to the user with the given username.
    ///
    /// # Errors
    /// [`AuthorityError::UserNotFound`] if the username is not registered.
    pub fn get_role(&self, username: &str) -> Result<Role> {
        let state = self.inner.lock().unwrap();
        Ok(state.user(username)?.role)
    }

    /// List all registered usernames, sorted.
    pub fn list_users(&self) -> Vec<String> {
        let state = self.inner.lock().unwrap();
        let mut users: Vec<String> = state.users.keys().cloned().collect();
        users.sort();
        users
    }

    /// Get the number of registered users.
    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    /// Get the length of a user's record log.
    ///
    /// Unlike [`Authority::get_data`] this is a pure read with no access
    /// gating; it reveals the valid index range, not record contents.
    ///
    /// # Errors
    /// [`AuthorityError::UserNotFound`] if the username is not registered.
    pub fn record_count(&self, username: &str) -> Result<usize> {
        let state = self.inner.lock().unwrap();
        Ok(state.user(username)?.records.len())
    }
}
