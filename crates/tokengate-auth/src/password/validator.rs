//! Password policy enforcement for new passwords.

use tokengate_core::config::AuthConfig;
use tokengate_core::error::{AppError, FieldError};

/// Characters that satisfy the "special character" rule.
pub const SPECIAL_CHARACTERS: &str = "`~<>?,./!@#$%^&*()-_+=\"'|{}[];:\\";

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
    max_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            max_length: config.password_max_length,
        }
    }

    /// Lists every rule the password breaks, in a fixed order.
    pub fn violations(&self, password: &str) -> Vec<String> {
        let mut violations = Vec::new();
        let length = password.chars().count();

        if length < self.min_length {
            violations.push(format!(
                "Password must have at least {} characters",
                self.min_length
            ));
        }
        if length > self.max_length {
            violations.push(format!(
                "Password must be up to {} characters",
                self.max_length
            ));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            violations.push("Password must have at least 1 uppercase character".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            violations.push("Password must have at least 1 lowercase character".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push("Password must have at least 1 number".to_string());
        }
        if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
            violations.push("Password must have at least 1 special character".to_string());
        }

        violations
    }

    /// Validates a password against all configured policies.
    ///
    /// Every violation is reported as a field error on `password`.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let violations = self.violations(password);
        if violations.is_empty() {
            return Ok(());
        }

        Err(AppError::validation_fields(
            violations
                .into_iter()
                .map(|message| FieldError::new("password", message))
                .collect(),
        ))
    }
}
