//! Token rejection reasons.

use thiserror::Error;

use tokengate_core::error::AppError;

/// Why a token could not be issued or was rejected.
///
/// The per-request variants are useful for logs only; at the HTTP boundary
/// they all collapse into the same "unauthorized" response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No signing secret was configured. Fatal at startup.
    #[error("signing key is missing or empty")]
    MissingSigningKey,
    /// Wrong segment count, empty segment, or an undecodable or foreign header.
    #[error("token is malformed")]
    MalformedToken,
    /// The signature is not canonical lowercase hex or does not match.
    #[error("token signature does not match")]
    BadSignature,
    /// The claims segment is not a valid claims record.
    #[error("token claims are malformed")]
    MalformedClaims,
    /// Signature and structure are fine but the expiry is in the past.
    #[error("token has expired")]
    Expired,
}

impl TokenError {
    /// Stable snake_case reason used as a structured log field.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingSigningKey => "missing_signing_key",
            Self::MalformedToken => "malformed_token",
            Self::BadSignature => "bad_signature",
            Self::MalformedClaims => "malformed_claims",
            Self::Expired => "expired",
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingSigningKey => AppError::configuration(
                "auth.jwt_secret (or JWT_SECRET) must be set to a non-empty value",
            ),
            _ => AppError::unauthorized(),
        }
    }
}
