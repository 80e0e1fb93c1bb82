//! User service - Handles user-related business logic.
//!
//! Registration enforces e-mail uniqueness and hashes the password through
//! the domain `Password` value object before anything is stored.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, Password, User};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Registration input with the plain text password
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new account
    async fn register(&self, input: RegisterUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users ordered by name
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, input: RegisterUser) -> AppResult<User> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            tracing::debug!(email = %input.email, "Registration rejected: e-mail taken");
            return Err(AppError::conflict("Email"));
        }

        let password_hash = Password::new(&input.password)?.into_string();

        let user = self
            .repo
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash,
                is_admin: input.is_admin,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::repository::MockUserRepository;

    fn existing_user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Existing".to_string(),
            email: email.to_string(),
            password_hash: "hashed".to_string(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    fn registration(email: &str) -> RegisterUser {
        RegisterUser {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            is_admin: true,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("a@x.com"))
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new_user| {
                new_user.email == "a@x.com"
                    && new_user.is_admin
                    && new_user.password_hash != "secret1"
                    && Password::from_hash(new_user.password_hash.clone()).verify("secret1")
            })
            .times(1)
            .returning(|new_user| {
                Ok(User::new(
                    Uuid::new_v4(),
                    new_user.name,
                    new_user.email,
                    new_user.password_hash,
                    new_user.is_admin,
                ))
            });

        let service = UserManager::new(Arc::new(repo));
        let user = assert_ok!(service.register(registration("a@x.com")).await);

        assert_eq!(user.email, "a@x.com");
        assert!(user.is_admin);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_does_not_write() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(existing_user(email))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let err = assert_err!(service.register(registration("a@x.com")).await);

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(user_id)).returning(|id| {
            let mut user = existing_user("a@x.com");
            user.id = id;
            Ok(Some(user))
        });

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user(user_id).await.unwrap();

        assert_eq!(user.id, user_id);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_list_users_passes_through_order() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| {
            let mut ada = existing_user("ada@x.com");
            ada.name = "Ada".to_string();
            let mut bob = existing_user("bob@x.com");
            bob.name = "Bob".to_string();
            Ok(vec![ada, bob])
        });

        let service = UserManager::new(Arc::new(repo));
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Ada");
    }
}
