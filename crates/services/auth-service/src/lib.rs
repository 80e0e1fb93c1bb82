//! Auth Service Library
//!
//! Credential checks and token issuing/verification. User records are read
//! through the user-service repository via the `UserDirectory` client trait.

pub mod client;
pub mod service;

pub use client::{UserClient, UserDirectory};
pub use service::{AuthService, Authenticator, Claims, Session};

#[cfg(any(test, feature = "test-utils"))]
pub use client::MockUserDirectory;
#[cfg(any(test, feature = "test-utils"))]
pub use service::MockAuthService;
