// handlers/public/auth/utils.rs - validation helpers and the token response body
use serde::Serialize;

use crate::api::PublicUser;

/// Minimum accepted password length for registration and password changes.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Body returned by login and registration.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}

/// Validate email format
pub fn validate_email_format(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || !parts[1].contains('.') {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(validate_email_format("a@b.co").is_ok());
        assert!(validate_email_format("").is_err());
        assert!(validate_email_format("no-at.example.com").is_err());
        assert!(validate_email_format("@example.com").is_err());
        assert!(validate_email_format("a@b@c.com").is_err());
        assert!(validate_email_format("a@localhost").is_err());
    }

    #[test]
    fn password_length() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }
}
