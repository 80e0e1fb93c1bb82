//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::UserResponse;
use user_service_lib::RegisterUser;

use crate::extractors::{UuidPath, ValidatedJson};
use crate::middleware::MaybeUser;
use crate::state::AppState;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Email with invalid format."))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "secret1")]
    pub password: String,
    /// Grant administrator flag
    pub is_admin: bool,
}

/// User listing
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// Single user
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(register))
        .route("/:id", get(get_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Validation error or e-mail already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<StatusCode> {
    state
        .user_service
        .register(RegisterUser {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            is_admin: payload.is_admin,
        })
        .await?;

    Ok(StatusCode::CREATED)
}

/// List all users ordered by name
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = UsersResponse),
        (status = 401, description = "Presented token is invalid")
    )
)]
pub async fn list_users(
    MaybeUser(caller): MaybeUser,
    State(state): State<AppState>,
) -> AppResult<Json<UsersResponse>> {
    if let Some(caller) = caller {
        debug!(caller = %caller.id, "Listing users");
    }

    let users = state.user_service.list_users().await?;
    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (UUID)")
    ),
    responses(
        (status = 200, description = "User profile", body = UserEnvelope),
        (status = 400, description = "Invalid Id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<UserEnvelope>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserEnvelope {
        user: UserResponse::from(user),
    }))
}
