//! User records and storage.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokengate_core::result::AppResult;

use crate::token::Identity;

pub use memory::MemoryUserStore;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Uuid,
    /// Display username.
    pub username: String,
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Argon2id PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The identity embedded into tokens issued for this user.
    pub fn identity(&self) -> Identity {
        Identity::new(self.id.to_string(), &self.username, &self.email)
    }
}

/// Data required to register a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display username.
    pub username: String,
    /// Login email.
    pub email: String,
    /// Already-hashed password.
    pub password_hash: String,
}

/// Storage for user records.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Registers a user. Fails with a conflict if the email is taken.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Looks up a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Returns whether the email is already registered.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
