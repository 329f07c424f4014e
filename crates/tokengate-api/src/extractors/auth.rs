//! `AuthUser` extractor: pulls the bearer token from the Authorization header and authenticates it.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use tokengate_auth::token::Claims;
use tokengate_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims of the authenticated caller, available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::debug!("Missing or malformed Authorization header");
            AppError::unauthorized()
        })?;

        let claims = state.auth.authenticate(token)?;
        Ok(AuthUser(claims))
    }
}

/// Returns the second space-delimited part of a `Bearer <token>` header.
///
/// `None` when the header is absent, not UTF-8, uses another scheme, or
/// has no token part.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split(' ');
    let scheme = parts.next()?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    parts.next().filter(|token| !token.is_empty())
}
