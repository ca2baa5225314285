//! Credential rules for new accounts.
//!
//! The functions here plug into `#[validate(custom(function = ...))]` on
//! request DTOs, so rejections surface as ordinary validation errors.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

pub const USERNAME_PATTERN: &str = "^[a-zA-Z0-9]{3,}$";

/// Characters a password may contain besides ASCII letters and digits.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()-_=+,.?;:{}|<>";

pub const PASSWORD_MIN_LENGTH: usize = 8;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(USERNAME_PATTERN).expect("valid regex"));

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= PASSWORD_MIN_LENGTH
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARS.contains(c))
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if is_valid_username(username) {
        return Ok(());
    }

    Err(ValidationError::new("username").with_message(Cow::Borrowed(
        "Invalid username. Use at least 3 English letters or digits",
    )))
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if is_valid_password(password) {
        return Ok(());
    }

    Err(ValidationError::new("password").with_message(Cow::Owned(format!(
        "Invalid password. Use at least {} characters with at least one English letter and one digit; allowed special characters: {}",
        PASSWORD_MIN_LENGTH, PASSWORD_SPECIAL_CHARS
    ))))
}
