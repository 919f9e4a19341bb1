//! Constants used throughout the warden library.
//!
//! This module provides central definitions for the credential format limits
//! enforced at registration.

/// The minimum length of a username.
pub const MIN_USERNAME_LEN: usize = 4;

/// The minimum length of a password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// The exact length of a device ID.
pub const DEVICE_ID_LEN: usize = 4;
