//! Auth handlers: sign-up, login, and session check.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use tokengate_auth::service::EMAIL_IN_USE;
use tokengate_auth::token::Claims;
use tokengate_core::error::{AppError, FieldError};

use crate::dto::request::{LoginRequest, SigninRequest};
use crate::dto::response::TokenResponse;
use crate::error::{ApiError, field_errors};
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// POST /auth/signin
pub async fn signin(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut fields = req
        .validate()
        .err()
        .map(|e| field_errors(&e))
        .unwrap_or_default();
    if !req.email.is_empty() && state.auth.is_email_taken(&req.email).await? {
        fields.push(FieldError::new("email", EMAIL_IN_USE));
    }
    fields.extend(
        state
            .password_validator
            .violations(&req.password)
            .into_iter()
            .map(|message| FieldError::new("password", message)),
    );
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    if !fields.is_empty() {
        return Err(AppError::validation_fields(fields).into());
    }

    let issued = state
        .auth
        .sign_up(&req.username, &req.email, &req.password)
        .await?;

    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation_fields(field_errors(&e)))?;

    let issued = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}

/// POST /auth/validate
///
/// Echoes the caller's claims when the bearer token is authentic and current.
pub async fn validate(auth: AuthUser) -> Json<Claims> {
    Json(auth.0)
}
