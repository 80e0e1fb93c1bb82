//! Authentication handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{UserResponse, TOKEN_COOKIE_NAME, TOKEN_COOKIE_PATH};

use crate::extractors::ValidatedQuery;
use crate::state::AppState;

/// Login credentials, passed as query parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginQuery {
    /// User email address
    #[validate(email(message = "Email with invalid format."))]
    #[param(example = "user@example.com")]
    pub email: String,
    /// User password
    pub password: String,
}

/// Successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed access token, also set as the `token` cookie
    pub token: String,
    pub user: UserResponse,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/", get(login))
}

/// Login and get JWT token
#[utoipa::path(
    get,
    path = "/",
    tag = "Authentication",
    params(LoginQuery),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials or malformed e-mail")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedQuery(query): ValidatedQuery<LoginQuery>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let session = state
        .auth_service
        .login(query.email, query.password)
        .await?;

    let cookie = Cookie::build((TOKEN_COOKIE_NAME, session.token.clone()))
        .path(TOKEN_COOKIE_PATH)
        .max_age(time::Duration::seconds(session.expires_in));

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            token: session.token,
            user: UserResponse::from(session.user),
        }),
    ))
}
