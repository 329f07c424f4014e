//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use tokengate_auth::password::{PasswordHasher, PasswordValidator};
use tokengate_auth::service::AuthService;
use tokengate_auth::token::TokenCodec;
use tokengate_auth::users::{MemoryUserStore, UserStore};
use tokengate_core::config::AppConfig;
use tokengate_core::error::AppError;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Sign-up, login, and token authentication
    pub auth: Arc<AuthService>,
    /// Password policy applied on sign-up
    pub password_validator: Arc<PasswordValidator>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Builds state with the in-memory user store.
    ///
    /// Fails if no signing secret is configured.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        Self::with_user_store(config, Arc::new(MemoryUserStore::new()))
    }

    /// Builds state around a caller-provided user store.
    pub fn with_user_store(
        config: AppConfig,
        users: Arc<dyn UserStore>,
    ) -> Result<Self, AppError> {
        let codec = Arc::new(TokenCodec::from_config(&config.auth)?);
        let auth = Arc::new(AuthService::new(
            codec,
            users,
            Arc::new(PasswordHasher::new()),
        ));
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));

        Ok(Self {
            config: Arc::new(config),
            auth,
            password_validator,
            started_at: Instant::now(),
        })
    }
}
