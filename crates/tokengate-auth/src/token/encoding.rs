//! Segment encoding: canonical JSON wrapped in unpadded base64url.
//!
//! Field order is fixed by the writers below and does not depend on how
//! `serde_json` orders map keys.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::claims::{Claims, Header};
use super::error::TokenError;

/// Canonical JSON for a header: `algorithm`, then `type`.
pub(crate) fn header_json(header: &Header) -> String {
    format!(
        "{{\"algorithm\":{},\"type\":{}}}",
        json_string(&header.algorithm),
        json_string(&header.token_type),
    )
}

/// Canonical JSON for a claims record: `id`, `username`, `email`, `expiredAt`.
pub(crate) fn claims_json(claims: &Claims) -> String {
    format!(
        "{{\"id\":{},\"username\":{},\"email\":{},\"expiredAt\":{}}}",
        json_string(claims.id()),
        json_string(claims.username()),
        json_string(claims.email()),
        claims.expires_at_epoch_millis(),
    )
}

/// Quotes and escapes `s` as a JSON string literal.
fn json_string(s: &str) -> String {
    Value::from(s).to_string()
}

/// Encodes raw JSON text as an unpadded base64url segment.
pub(crate) fn encode_segment(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Decodes a base64url segment into `T`, reporting `on_error` on any failure.
pub(crate) fn decode_segment<T: DeserializeOwned>(
    segment: &str,
    on_error: TokenError,
) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD.decode(segment).map_err(|_| on_error)?;
    serde_json::from_slice(&bytes).map_err(|_| on_error)
}
