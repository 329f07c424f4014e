//! Header and claims records carried inside a token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Algorithm name declared in every header.
pub const ALGORITHM: &str = "HS512";

/// Token type declared in every header.
pub const TOKEN_TYPE: &str = "JWT";

/// Fixed-shape header declaring the signing scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm, always [`ALGORITHM`].
    pub algorithm: String,
    /// Token type, always [`TOKEN_TYPE`].
    #[serde(rename = "type")]
    pub token_type: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            algorithm: ALGORITHM.to_string(),
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

/// The authenticated identity a token is issued for.
///
/// Fields are opaque strings; format checks belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID.
    pub id: String,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
}

impl Identity {
    /// Creates an identity from its three fields.
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Claims payload: the identity plus an absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    id: String,
    username: String,
    email: String,
    #[serde(rename = "expiredAt", deserialize_with = "epoch_millis")]
    expires_at_epoch_millis: i64,
}

impl Claims {
    /// Builds claims for `identity` expiring at `expires_at`.
    pub fn new(identity: &Identity, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: identity.id.clone(),
            username: identity.username.clone(),
            email: identity.email.clone(),
            expires_at_epoch_millis: expires_at.timestamp_millis(),
        }
    }

    /// Returns the user ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the expiry as milliseconds since the Unix epoch.
    pub fn expires_at_epoch_millis(&self) -> i64 {
        self.expires_at_epoch_millis
    }

    /// Returns the expiry as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expires_at_epoch_millis)
    }

    /// Returns the identity portion of the claims.
    pub fn identity(&self) -> Identity {
        Identity::new(&self.id, &self.username, &self.email)
    }
}

/// Accepts the expiry either as an integer or as a decimal string.
///
/// Older issuers wrote `"expiredAt":"1700000000000"`.
fn epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Number(i64),
        Text(String),
    }

    match Millis::deserialize(deserializer)? {
        Millis::Number(n) => Ok(n),
        Millis::Text(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}
