//! Request DTOs with validation.
//!
//! Missing string fields deserialize as empty so they surface as
//! validation messages rather than body rejections.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Shortest accepted username, in characters.
pub const USERNAME_MIN_CHARS: usize = 3;
/// Longest accepted username, in characters.
pub const USERNAME_MAX_CHARS: usize = 15;

/// Sign-up request body.
///
/// The password policy is configurable and checked by the handler.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    /// Display username.
    #[serde(default)]
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    /// Login email.
    #[serde(default)]
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[serde(default)]
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password cannot be blank"))]
    pub password: String,
}

/// Username length check with a distinct message for each bound.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    let message = if len < USERNAME_MIN_CHARS {
        format!("Username must have at least {USERNAME_MIN_CHARS} characters")
    } else if len > USERNAME_MAX_CHARS {
        format!("Username must be up to {USERNAME_MAX_CHARS} characters")
    } else {
        return Ok(());
    };
    Err(ValidationError::new("length").with_message(Cow::Owned(message)))
}
