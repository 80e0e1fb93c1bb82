//! User service business logic.

mod user_service;

pub use user_service::{RegisterUser, UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
