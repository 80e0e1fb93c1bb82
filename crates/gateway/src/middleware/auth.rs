//! Token authentication extractors.
//!
//! Public and protected methods share paths (`GET /products` vs
//! `POST /products`), so authentication is enforced per handler through
//! extractors rather than a router-wide layer.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;
use uuid::Uuid;

use auth_service_lib::Claims;
use common::AppError;
use domain::{BEARER_TOKEN_PREFIX, TOKEN_COOKIE_NAME};

use crate::state::AppState;

/// Current authenticated user extracted from a verified token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub is_admin: bool,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            is_admin: claims.is_admin,
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        verify(state, &token)
    }
}

/// Caller identity when a token is optional.
///
/// No token yields `None`; a presented token must still verify.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match extract_token(&parts.headers) {
            Some(token) => verify(state, &token).map(|user| MaybeUser(Some(user))),
            None => Ok(MaybeUser(None)),
        }
    }
}

fn verify(state: &AppState, token: &str) -> Result<CurrentUser, AppError> {
    state
        .auth_service
        .verify_token(token)
        .map(CurrentUser::from)
        .inspect_err(|e| warn!(code = e.code(), "Rejected request token"))
}

/// Bearer token from the Authorization header, else the `token` cookie.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(TOKEN_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|t| !t.is_empty())
}
