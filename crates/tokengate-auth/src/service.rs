//! Sign-up, login, and token authentication flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tokengate_core::error::{AppError, ErrorKind, FieldError};
use tokengate_core::result::AppResult;

use crate::password::PasswordHasher;
use crate::token::{Claims, TokenCodec, policy};
use crate::users::{NewUser, User, UserStore};

/// Message returned for any failed login, whichever check failed.
const BAD_CREDENTIALS: &str = "Email or password incorrect";

/// Field message for a sign-up email that is already registered.
pub const EMAIL_IN_USE: &str = "Email already in use";

/// A freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The bearer token.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Coordinates the user store, password hashing, and token codec.
#[derive(Clone)]
pub struct AuthService {
    codec: Arc<TokenCodec>,
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        codec: Arc<TokenCodec>,
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            codec,
            users,
            hasher,
        }
    }

    /// Registers a user and issues their first token.
    ///
    /// Username, email and password policy must already be validated.
    pub async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<IssuedToken> {
        if self.users.exists_by_email(email).await? {
            return Err(email_in_use());
        }

        let password_hash = self.hash_password(password).await?;

        let user = self
            .users
            .create(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => email_in_use(),
                _ => e,
            })?;

        info!(user_id = %user.id, "User registered");
        Ok(self.issue(&user))
    }

    /// Returns `true` if `email` already belongs to a registered user.
    pub async fn is_email_taken(&self, email: &str) -> AppResult<bool> {
        self.users.exists_by_email(email).await
    }

    /// Checks credentials and issues a token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let Some(user) = self.users.find_by_email(email).await? else {
            debug!("Login for unknown email");
            return Err(AppError::validation(BAD_CREDENTIALS));
        };

        if !self.verify_password(password, &user.password_hash).await? {
            debug!(user_id = %user.id, "Login with wrong password");
            return Err(AppError::validation(BAD_CREDENTIALS));
        }

        info!(user_id = %user.id, "User logged in");
        Ok(self.issue(&user))
    }

    /// Authenticates a bearer token.
    ///
    /// The specific rejection reason is logged, never returned.
    pub fn authenticate(&self, token: &str) -> AppResult<Claims> {
        self.codec.authenticate(token).map_err(|e| {
            debug!(reason = e.reason(), "Token rejected");
            AppError::from(e)
        })
    }

    fn issue(&self, user: &User) -> IssuedToken {
        let issued_at = Utc::now();
        IssuedToken {
            token: self.codec.generate_at(&user.identity(), issued_at),
            expires_at: policy::expiry_for(issued_at),
        }
    }

    async fn hash_password(&self, password: &str) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
    }
}

fn email_in_use() -> AppError {
    AppError::validation_fields(vec![FieldError::new("email", EMAIL_IN_USE)])
}
