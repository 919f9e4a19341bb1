use warden::{Authority, user::Role};

/// Password accepted by the registration format rules.
pub const PASSWORD: &str = "Passw0rd!";

/// Device ID accepted by the registration format rules.
pub const DEVICE_ID: &str = "1234";

/// Creates an empty authority.
pub fn new_authority() -> Authority {
    Authority::new()
}

/// Registers `username` with the shared test credentials.
pub fn register_user(authority: &Authority, username: &str) {
    authority
        .register(username, PASSWORD, DEVICE_ID)
        .unwrap_or_else(|e| panic!("Failed to register {username}: {e}"));
}

/// Registers `username` and completes a successful login.
pub fn login_user(authority: &Authority, username: &str) {
    register_user(authority, username);
    authority
        .login(username, PASSWORD, DEVICE_ID)
        .unwrap_or_else(|e| panic!("Failed to log in {username}: {e}"));
}

/// Registers `username`, logs in, and upgrades the user to admin:
/// the full path to record access.
pub fn authenticated_admin(authority: &Authority, username: &str) {
    login_user(authority, username);
    authority
        .assign_role(username, Role::Admin)
        .unwrap_or_else(|e| panic!("Failed to upgrade {username}: {e}"));
}
