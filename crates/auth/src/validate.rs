use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AuthError, Result};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 3;

/// Shape checks for registration input.
pub fn signup(email: &str, password: &str, name: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(AuthError::Validation("email is not well-formed"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation("password must be at least 6 characters"));
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(AuthError::Validation("name must be at least 3 characters"));
    }
    Ok(())
}

/// Shape checks for login input.
pub fn signin(email: &str, password: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(AuthError::Validation("email is not well-formed"));
    }
    if password.is_empty() {
        return Err(AuthError::Validation("password is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_accepts_valid_input() {
        assert!(signup("a@x.com", "secret1", "Alice").is_ok());
        assert!(signup("first.last+tag@sub.example.org", "longenough", "Bob").is_ok());
    }

    #[test]
    fn test_signup_rejects_bad_email() {
        assert!(signup("not-an-email", "secret1", "Alice").is_err());
        assert!(signup("missing@tld", "secret1", "Alice").is_err());
        assert!(signup("@x.com", "secret1", "Alice").is_err());
        assert!(signup("", "secret1", "Alice").is_err());
    }

    #[test]
    fn test_signup_rejects_short_password() {
        assert!(signup("a@x.com", "five5", "Alice").is_err());
        assert!(signup("a@x.com", "", "Alice").is_err());
        assert!(signup("a@x.com", "sixsix", "Alice").is_ok());
    }

    #[test]
    fn test_signup_rejects_short_name() {
        assert!(signup("a@x.com", "secret1", "Al").is_err());
        assert!(signup("a@x.com", "secret1", "Ali").is_ok());
    }

    #[test]
    fn test_signin_requires_password_present_only() {
        // Login only checks presence; length rules apply at registration.
        assert!(signin("a@x.com", "x").is_ok());
        assert!(signin("a@x.com", "").is_err());
        assert!(signin("nope", "secret1").is_err());
    }
}
