//! Authentication service - Handles user authentication and authorization.
//!
//! Login verifies the password through the domain `Password` value object and
//! issues an HS256 token. Every consumer of claims goes through
//! `verify_token`, which checks both signature and expiry.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::UserDirectory;
use common::{AppError, AppResult, JwtConfig};
use domain::{Password, User, SECONDS_PER_HOUR};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub iat: i64,
    pub exp: i64,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct Session {
    /// Signed access token
    pub token: String,
    /// Authenticated user
    pub user: User,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<Session>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserDirectory>,
    jwt: JwtConfig,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserDirectory>, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }

    /// Generate JWT token for a user
    fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.jwt.expiration_hours);

        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        sign(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt.secret_bytes()),
        )
    }
}

/// Encode claims. A signing failure is a server fault, never a rejected token.
fn sign(header: &Header, claims: &Claims, key: &EncodingKey) -> AppResult<String> {
    encode(header, claims, key)
        .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: String, password: String) -> AppResult<Session> {
        let user = self.users.find_by_email(&email).await?;

        // Verify against a dummy hash when the user is unknown so both
        // failure paths cost one argon2 verification.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(&password);

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                warn!(email = %email, "Login failed");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = self.generate_token(&user)?;
        debug!(user_id = %user.id, "Token issued");

        Ok(Session {
            token,
            user,
            expires_in: self.jwt.expiration_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt.secret_bytes()),
            &Self::validation(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => {
                debug!(error = %e, "Token rejected");
                AppError::Unauthorized
            }
        })
    }
}
