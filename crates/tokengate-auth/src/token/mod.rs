//! Compact signed session tokens.
//!
//! A token is `base64url(header) . base64url(claims) . hex(HMAC-SHA512)`.
//! Nothing is stored server-side; every check re-derives validity from the
//! token bytes, the signing key, and the clock.

pub mod claims;
pub(crate) mod encoding;
pub mod error;
pub mod policy;
pub mod signing;

use chrono::{DateTime, Utc};

use tokengate_core::config::AuthConfig;

pub use claims::{Claims, Header, Identity};
pub use error::TokenError;
pub use signing::{SIGNATURE_HEX_LEN, SigningKey};

use self::encoding::{claims_json, decode_segment, encode_segment, header_json};
use self::policy::{SEGMENT_SEPARATOR, Segments, check_expiry, expiry_for, split_token};

/// Issues and verifies tokens with a single signing key.
///
/// Cheap to share behind an `Arc`; all methods take `&self` and touch no
/// mutable state.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    key: SigningKey,
    header_segment: String,
}

impl TokenCodec {
    /// Creates a codec around `key`.
    pub fn new(key: SigningKey) -> Self {
        Self {
            key,
            header_segment: encode_segment(&header_json(&Header::default())),
        }
    }

    /// Creates a codec from `auth.jwt_secret`.
    pub fn from_config(config: &AuthConfig) -> Result<Self, TokenError> {
        SigningKey::from_config(config).map(Self::new)
    }

    /// Issues a token for `identity`, valid for one calendar month from now.
    pub fn generate(&self, identity: &Identity) -> String {
        self.generate_at(identity, Utc::now())
    }

    /// Issues a token as if the current time were `issued_at`.
    pub fn generate_at(&self, identity: &Identity, issued_at: DateTime<Utc>) -> String {
        let claims = Claims::new(identity, expiry_for(issued_at));
        let claims_segment = encode_segment(&claims_json(&claims));

        let mut token = String::with_capacity(
            self.header_segment.len() + claims_segment.len() + SIGNATURE_HEX_LEN + 2,
        );
        token.push_str(&self.header_segment);
        token.push(SEGMENT_SEPARATOR);
        token.push_str(&claims_segment);

        let signature = self.key.sign(&token);
        token.push(SEGMENT_SEPARATOR);
        token.push_str(&signature);
        token
    }

    /// Returns `true` iff the token has three segments and its signature
    /// matches. Expiry is not checked.
    pub fn validate(&self, token: &str) -> bool {
        self.verify_signature(token).is_ok()
    }

    /// Verifies signature, structure, and expiry against the current time.
    pub fn authenticate(&self, token: &str) -> Result<Claims, TokenError> {
        self.authenticate_at(token, Utc::now())
    }

    /// Verifies signature, structure, and expiry against `now`.
    pub fn authenticate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let segments = self.verify_signature(token)?;

        let header: Header = decode_segment(segments.header, TokenError::MalformedToken)?;
        if header != Header::default() {
            return Err(TokenError::MalformedToken);
        }

        let claims: Claims = decode_segment(segments.claims, TokenError::MalformedClaims)?;
        check_expiry(&claims, now)?;

        Ok(claims)
    }

    fn verify_signature<'a>(&self, token: &'a str) -> Result<Segments<'a>, TokenError> {
        let segments = split_token(token)?;
        self.key.verify(segments.signing_input, segments.signature)?;
        Ok(segments)
    }
}
