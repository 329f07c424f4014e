//! # tokengate-core
//!
//! Core crate for TokenGate. Contains configuration schemas and the
//! unified error system shared by the auth and API crates.
//!
//! This crate has **no** internal dependencies on other TokenGate crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
