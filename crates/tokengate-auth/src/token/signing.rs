//! HMAC-SHA512 signing and constant-time verification.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use tokengate_core::config::AuthConfig;

use super::error::TokenError;

type HmacSha512 = Hmac<Sha512>;

/// Length of a signature segment: a SHA-512 digest in hex.
pub const SIGNATURE_HEX_LEN: usize = 128;

/// Process-wide signing secret.
///
/// The keyed MAC state is prepared once at construction and cloned per
/// signature, so signing never fails after startup.
#[derive(Clone)]
pub struct SigningKey {
    mac: HmacSha512,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Creates a key from raw secret bytes. Empty secrets are rejected.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, TokenError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(TokenError::MissingSigningKey);
        }
        let mac = HmacSha512::new_from_slice(secret).map_err(|_| TokenError::MissingSigningKey)?;
        Ok(Self { mac })
    }

    /// Loads the key from `auth.jwt_secret`.
    pub fn from_config(config: &AuthConfig) -> Result<Self, TokenError> {
        match config.jwt_secret.as_deref() {
            Some(secret) => Self::new(secret),
            None => Err(TokenError::MissingSigningKey),
        }
    }

    /// Signs `signing_input` and returns the lowercase hex digest.
    pub(crate) fn sign(&self, signing_input: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(signing_input.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Checks a hex signature against `signing_input` in constant time.
    ///
    /// Only the exact form [`sign`](Self::sign) produces is accepted:
    /// [`SIGNATURE_HEX_LEN`] lowercase hex digits.
    pub(crate) fn verify(&self, signing_input: &str, signature_hex: &str) -> Result<(), TokenError> {
        if !is_canonical_hex(signature_hex) {
            return Err(TokenError::BadSignature);
        }
        let signature = hex::decode(signature_hex).map_err(|_| TokenError::BadSignature)?;
        let mut mac = self.mac.clone();
        mac.update(signing_input.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)
    }
}

fn is_canonical_hex(s: &str) -> bool {
    s.len() == SIGNATURE_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
