use anyhow::anyhow;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, request::Parts},
};
use learnlive_core::AppError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// Joins every failed rule into one message, ordered by field name so the
/// response is stable.
fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| match &failure.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
}

/// JSON body extractor that runs `Validate` after decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value.validate().map_err(|errors| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                anyhow!("{}", format_errors(&errors)),
            )
        })?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    let error_msg = rejection.body_text();

    if let Some(field) = missing_field(&error_msg) {
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    AppError::bad_request(anyhow!("Error reading request body"))
}

/// Query string extractor whose failures read `"<name> must be an integer"`.
///
/// Every query parameter in the API is an integer id, so any value that
/// fails to deserialize is reported that way.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection)?;

        Ok(ValidatedQuery(value))
    }
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    let error_msg = rejection.body_text();

    if let Some(field) = missing_field(&error_msg) {
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    // "Failed to deserialize query string: <field>: <reason>"
    let field = error_msg
        .split(": ")
        .nth(1)
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));

    match field {
        Some(field) => AppError::bad_request(anyhow!("{} must be an integer", field)),
        None => AppError::bad_request(anyhow!("Query parameters must be integers")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_extracted() {
        assert_eq!(
            missing_field("Failed to deserialize query string: missing field `group_id`"),
            Some("group_id")
        );
        assert_eq!(missing_field("something else"), None);
    }

    #[derive(Debug, Validate)]
    struct SampleForm {
        #[validate(length(min = 3, message = "name too short"))]
        name: String,
        #[validate(range(min = 1))]
        age: i32,
    }

    #[test]
    fn test_validation_messages_are_ordered_by_field() {
        let form = SampleForm {
            name: "x".to_string(),
            age: 0,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(format_errors(&errors), "age is invalid, name too short");
    }
}
