//! Token shape and lifetime rules.

use chrono::{DateTime, Months, Utc};

use super::claims::Claims;
use super::error::TokenError;

/// Separator between the three token segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// How long an issued token stays valid.
pub const TOKEN_LIFETIME: Months = Months::new(1);

/// The three borrowed segments of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub header: &'a str,
    pub claims: &'a str,
    pub signature: &'a str,
    /// `header.claims`, exactly as it appears in the token.
    pub signing_input: &'a str,
}

/// Splits a token into exactly three non-empty segments.
pub(crate) fn split_token(token: &str) -> Result<Segments<'_>, TokenError> {
    let mut parts = token.split(SEGMENT_SEPARATOR);
    let (Some(header), Some(claims), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::MalformedToken);
    };

    if header.is_empty() || claims.is_empty() || signature.is_empty() {
        return Err(TokenError::MalformedToken);
    }

    let signing_input = &token[..header.len() + 1 + claims.len()];
    Ok(Segments {
        header,
        claims,
        signature,
        signing_input,
    })
}

/// Expiry for a token issued at `issued_at`: one calendar month later.
///
/// When the target month is shorter, the day is clamped to its last day
/// (Jan 31 becomes Feb 28, or Feb 29 in a leap year). Time of day is kept.
pub fn expiry_for(issued_at: DateTime<Utc>) -> DateTime<Utc> {
    issued_at
        .checked_add_months(TOKEN_LIFETIME)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Rejects claims whose expiry lies strictly before `now`.
pub(crate) fn check_expiry(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenError> {
    if now.timestamp_millis() > claims.expires_at_epoch_millis() {
        return Err(TokenError::Expired);
    }
    Ok(())
}
