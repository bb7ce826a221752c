use crate::api::{AdminLoginRequest, ApiError};

pub const ACCESS_DENIED: &str = "Access denied. Check your credentials and try again.";
pub const SERVER_UNREACHABLE: &str = "Unable to reach the server. Please try again.";

/// Both fields are required; the identifier is trimmed, the password is sent as typed.
pub fn validate_credentials(identifier: &str, password: &str) -> Result<AdminLoginRequest, String> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err("Please enter your username or email".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(AdminLoginRequest {
        username_or_email: identifier.to_string(),
        password: password.to_string(),
    })
}

/// Server detail is never shown on the login form.
pub fn login_error_message(error: &ApiError) -> &'static str {
    if error.is_transport() {
        SERVER_UNREACHABLE
    } else {
        ACCESS_DENIED
    }
}
