//! # tokengate-auth
//!
//! Stateless bearer-token issuance and verification plus the credential
//! plumbing around it.
//!
//! ## Modules
//!
//! - `token`: token generation, signature validation, and authentication
//! - `password`: Argon2id password hashing and policy enforcement
//! - `users`: user records and the in-memory user store
//! - `service`: sign-up / login / authenticate flows used by the API

pub mod password;
pub mod service;
pub mod token;
pub mod users;

pub use password::{PasswordHasher, PasswordValidator};
pub use service::{AuthService, IssuedToken};
pub use token::{Claims, Identity, SigningKey, TokenCodec, TokenError};
pub use users::{MemoryUserStore, NewUser, User, UserStore};
