//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and credential policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA512). Required at startup.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
        }
    }
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    20
}
