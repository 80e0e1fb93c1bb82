//! User Service Library
//!
//! Account registration and lookup on top of the shared relational store.
//! The auth service reads credentials through this crate's repository.

pub mod repository;
pub mod service;

pub use repository::{UserRepository, UserStore};
pub use service::{RegisterUser, UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use service::MockUserService;
