//! Domain-level errors.

use thiserror::Error;

/// Failures raised inside the domain crate itself.
///
/// Lookups, conflicts and credential checks live in the service layer and
/// are expressed directly as `common::AppError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The hasher refused to produce a hash
    #[error("Password hash failed: {0}")]
    Hashing(String),

    /// A stored hash could not be parsed
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
