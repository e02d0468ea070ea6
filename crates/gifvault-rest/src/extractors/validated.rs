//! Validated extractors for automatic request validation.
//!
//! `ValidatedJson<T>` and `ValidatedQuery<T>` deserialize a request body or
//! query string and validate it with the `validator` crate. Violations are
//! returned as 422 Unprocessable Entity with field-level error details.

use crate::responses::ApiResponse;
use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use gifvault_core::{ErrorResponse, FieldError};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor that automatically validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Query extractor that automatically validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T> std::ops::Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated extraction.
pub enum ValidationRejection {
    /// Payload parsing/deserialization error.
    Malformed(String),
    /// Validation error with field-level details.
    Invalid(ValidationErrors),
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let error_response = match self {
            Self::Malformed(message) => ErrorResponse {
                code: "VALIDATION_ERROR".to_string(),
                message,
                details: None,
            },
            Self::Invalid(errors) => ErrorResponse {
                code: "VALIDATION_ERROR".to_string(),
                message: "Request validation failed".to_string(),
                details: Some(convert_validation_errors(&errors)),
            },
        };

        let body = Json(ApiResponse::<()>::error(error_response));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

impl From<JsonRejection> for ValidationRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(format!("Invalid JSON body: {}", rejection))
    }
}

impl From<QueryRejection> for ValidationRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed(format!("Invalid query string: {}", rejection))
    }
}

/// Convert validator errors to field errors.
fn convert_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors = Vec::new();

    for (field, field_errs) in errors.field_errors() {
        for err in field_errs {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Validation failed for field '{}'", field));

            field_errors.push(FieldError {
                field: field.to_string(),
                message,
                code: err.code.to_string(),
            });
        }
    }

    field_errors
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate().map_err(ValidationRejection::Invalid)?;

        Ok(ValidatedJson(value))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;

        value.validate().map_err(ValidationRejection::Invalid)?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestRequest {
        #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
        name: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_convert_validation_errors_single_field() {
        let req = TestRequest {
            name: "ab".to_string(),
            email: "valid@example.com".to_string(),
        };

        let errors = req.validate().unwrap_err();
        let field_errors = convert_validation_errors(&errors);

        assert_eq!(field_errors.len(), 1);
        assert_eq!(field_errors[0].field, "name");
        assert_eq!(field_errors[0].message, "Name must be at least 3 characters");
    }

    #[test]
    fn test_convert_validation_errors_multiple_fields() {
        let req = TestRequest {
            name: "ab".to_string(),
            email: "invalid".to_string(),
        };

        let errors = req.validate().unwrap_err();
        let field_errors = convert_validation_errors(&errors);

        assert_eq!(field_errors.len(), 2);

        let field_names: Vec<&str> = field_errors.iter().map(|e| e.field.as_str()).collect();
        assert!(field_names.contains(&"name"));
        assert!(field_names.contains(&"email"));
    }

    #[test]
    fn test_valid_request_passes() {
        let req = TestRequest {
            name: "Valid Name".to_string(),
            email: "valid@example.com".to_string(),
        };

        assert!(req.validate().is_ok());
    }
}
