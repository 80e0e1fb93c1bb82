//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours (30 days)
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24 * 30;

/// Longest accepted token lifetime in hours (ten years)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365 * 10;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token and cookie expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Name of the cookie mirroring the bearer token
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Path the token cookie is scoped to
pub const TOKEN_COOKIE_PATH: &str = "/";

// =============================================================================
// Catalog
// =============================================================================

/// Capacity of the hot products working set
pub const HOT_PRODUCTS_LIMIT: usize = 5;

// =============================================================================
// Validation messages
// =============================================================================

/// Message for malformed identifiers
pub const INVALID_ID_MESSAGE: &str = "Invalid Id";
