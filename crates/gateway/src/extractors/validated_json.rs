//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;

/// JSON extractor that automatically validates the payload.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Join every field error into one message, falling back to "<field> is invalid".
pub fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Signup {
        #[validate(email(message = "Email with invalid format."))]
        email: String,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_custom_message_is_used() {
        let signup = Signup {
            email: "nope".to_string(),
            name: "Ada".to_string(),
        };
        let errors = signup.validate().unwrap_err();

        assert_eq!(format_validation_errors(&errors), "Email with invalid format.");
    }

    #[test]
    fn test_missing_message_falls_back_to_field_name() {
        let signup = Signup {
            email: "a@x.com".to_string(),
            name: String::new(),
        };
        let errors = signup.validate().unwrap_err();

        assert_eq!(format_validation_errors(&errors), "name is invalid");
    }
}
