//! Path id extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::INVALID_ID_MESSAGE;

/// Single `:id` path segment parsed as a UUID.
///
/// Malformed ids are rejected with a validation error before any lookup.
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation(INVALID_ID_MESSAGE))?;

        parse_id(&raw).map(UuidPath)
    }
}

/// Parse an id, mapping failures to `Validation("Invalid Id")`.
pub fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::validation(INVALID_ID_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        match parse_id("42") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, INVALID_ID_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
