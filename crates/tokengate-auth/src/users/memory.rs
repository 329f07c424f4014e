//! In-memory user store backed by `DashMap`.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use tokengate_core::error::AppError;
use tokengate_core::result::AppResult;

use super::{NewUser, User, UserStore};

/// Process-local user store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    /// Users keyed by lowercase email.
    users: DashMap<String, User>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        match self.users.entry(email_key(&new_user.email)) {
            Entry::Occupied(_) => Err(AppError::conflict("Email already in use")),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    username: new_user.username,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    created_at: Utc::now(),
                };
                debug!(user_id = %user.id, "User created");
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .get(&email_key(email))
            .map(|entry| entry.value().clone()))
    }
}
