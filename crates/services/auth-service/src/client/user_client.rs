//! In-process client for user-service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use common::AppResult;
use domain::User;
use user_service_lib::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User lookups needed by auth-service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find user by email, including the stored password hash
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// Client backed by the user-service repository.
pub struct UserClient {
    repo: Arc<dyn UserRepository>,
}

impl UserClient {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserDirectory for UserClient {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        debug!(email = %email, "Looking up user for authentication");
        self.repo.find_by_email(email).await
    }
}
