//! Registration validation and uniqueness tests.

use warden::{Error, authority::AuthorityError};

use crate::helpers::*;

#[test]
fn test_register_valid_user() {
    let authority = new_authority();
    authority.register("Alice", "Passw0rd!", "1234").unwrap();

    assert!(authority.is_user("Alice"));
    assert!(!authority.is_authenticated("Alice").unwrap());
}

#[test]
fn test_register_short_username() {
    let authority = new_authority();
    let err = authority.register("bob", PASSWORD, DEVICE_ID).unwrap_err();
    match err {
        Error::Authority(AuthorityError::InvalidUsername { username }) => {
            assert_eq!(username, "bob")
        }
        _ => panic!("Unexpected error variant"),
    }
    assert!(!authority.is_user("bob"));
}

#[test]
fn test_register_username_with_invalid_characters() {
    let authority = new_authority();
    for username in ["user1", "user!", "us er", "usér"] {
        let err = authority
            .register(username, PASSWORD, DEVICE_ID)
            .unwrap_err();
        assert!(err.is_validation_error(), "{username} should be rejected");
        assert!(!authority.is_user(username));
    }
}

#[test]
fn test_register_short_password() {
    let authority = new_authority();
    let err = authority.register("Carol", "short1!", "1234").unwrap_err();
    match err {
        Error::Authority(AuthorityError::InvalidPassword { password }) => {
            assert_eq!(password, "short1!")
        }
        _ => panic!("Unexpected error variant"),
    }
}

#[test]
fn test_register_password_missing_character_class() {
    let authority = new_authority();
    // Missing special, digit, and letter respectively
    for password in ["abcd1234", "abcdefg!", "1234567!"] {
        let err = authority
            .register("Carol", password, DEVICE_ID)
            .unwrap_err();
        assert!(err.is_validation_error(), "{password} should be rejected");
    }
}

#[test]
fn test_register_invalid_device_id() {
    let authority = new_authority();
    for device_id in ["123", "12345", "12a4", ""] {
        let err = authority
            .register("Carol", PASSWORD, device_id)
            .unwrap_err();
        match err {
            Error::Authority(AuthorityError::InvalidDeviceId { device_id: rejected }) => {
                assert_eq!(rejected, device_id)
            }
            _ => panic!("Unexpected error variant"),
        }
    }
}

#[test]
fn test_register_duplicate_wins_over_validation() {
    let authority = new_authority();
    register_user(&authority, "Alice");

    // Even with invalid password and device ID, the duplicate check fires first
    let err = authority.register("Alice", "x", "y").unwrap_err();
    assert!(err.is_conflict());

    // And the stored credentials are still the original ones
    authority.login("Alice", PASSWORD, DEVICE_ID).unwrap();
}

#[test]
fn test_register_validation_order() {
    let authority = new_authority();

    // Username and password both invalid: username error surfaces
    let err = authority.register("ab", "short", "bad").unwrap_err();
    assert!(matches!(
        err,
        Error::Authority(AuthorityError::InvalidUsername { .. })
    ));

    // Password and device ID both invalid: password error surfaces
    let err = authority.register("Carol", "short", "bad").unwrap_err();
    assert!(matches!(
        err,
        Error::Authority(AuthorityError::InvalidPassword { .. })
    ));
}

#[test]
fn test_register_many_users() {
    let authority = new_authority();
    for username in ["Alice", "Bobby", "Carol", "David"] {
        register_user(&authority, username);
    }
    assert_eq!(authority.user_count(), 4);
}

#[test]
fn test_concurrent_registration_single_winner() {
    let authority = new_authority();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let authority = authority.clone();
            std::thread::spawn(move || authority.register("Alice", PASSWORD, DEVICE_ID).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|registered| *registered)
        .count();

    // The duplicate-check-then-insert sequence runs under one lock, so
    // exactly one thread can win
    assert_eq!(successes, 1);
    assert_eq!(authority.user_count(), 1);
}
