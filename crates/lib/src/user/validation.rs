//! Credential format rules enforced at registration
//!
//! These predicates only judge format. Whether a credential matches a stored
//! one is the authority's concern, not this module's.

use crate::constants::{DEVICE_ID_LEN, MIN_PASSWORD_LEN, MIN_USERNAME_LEN};

/// Validate a username: at least [`MIN_USERNAME_LEN`] characters, ASCII
/// letters only.
pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() >= MIN_USERNAME_LEN
        && username.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate a password: at least [`MIN_PASSWORD_LEN`] characters, containing
/// at least one ASCII letter, one ASCII digit, and one character that is
/// neither.
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return false;
    }

    let mut letter = false;
    let mut digit = false;
    let mut special = false;
    for c in password.chars() {
        if c.is_ascii_alphabetic() {
            letter = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else {
            special = true;
        }
    }
    letter && digit && special
}

/// Validate a device ID: exactly [`DEVICE_ID_LEN`] characters, ASCII digits
/// only.
pub fn is_valid_device_id(device_id: &str) -> bool {
    device_id.chars().count() == DEVICE_ID_LEN && device_id.chars().all(|c| c.is_ascii_digit())
}
