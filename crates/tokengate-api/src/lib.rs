//! # tokengate-api
//!
//! HTTP API layer for TokenGate built on Axum.
//!
//! Provides the sign-up, login, and session-check endpoints, the bearer
//! token extractor, middleware (CORS, request logging), DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
