//! Request extractors that turn raw input into validated, typed values.

mod uuid_path;
mod validated_json;
mod validated_query;

pub use uuid_path::{parse_id, UuidPath};
pub use validated_json::{format_validation_errors, ValidatedJson};
pub use validated_query::ValidatedQuery;
