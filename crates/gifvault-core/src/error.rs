//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message the GIF provider sends on input errors, regardless of the
/// transmitted HTTP status. Matched byte-for-byte.
const PROVIDER_VALIDATION_MESSAGE: &str = "Validation error";

/// Unified error type for all layers of GifVault.
#[derive(Error, Debug)]
pub enum GifVaultError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A favorite already exists for the same (user, gif) pair
    #[error("There is already a favorite GIF with this ID for this user.")]
    DuplicateFavorite,

    // ============ Authentication/Authorization Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden access
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token expired
    #[error("Token expired")]
    TokenExpired,

    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    // ============ Upstream Provider Errors ============
    /// Non-success response from the GIF provider
    #[error("Provider error ({status_code}): {message}")]
    Provider { message: String, status_code: u16 },

    /// Malformed provider payload, signals a contract break upstream
    #[error("Provider payload mapping failed: {0}")]
    Mapping(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GifVaultError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 422,
            Self::DuplicateFavorite => 409,
            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::TokenExpired | Self::InvalidCredentials => 401,
            Self::Forbidden(_) => 403,
            Self::Provider { status_code, .. } => *status_code,
            Self::Mapping(_) => 502,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Cache(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateFavorite => "DUPLICATE_FAVORITE",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::Mapping(_) => "PROVIDER_CONTRACT_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Creates a provider error from the upstream message and status.
    ///
    /// The provider transmits input errors with inconsistent HTTP statuses
    /// but a fixed message; that message always maps to 422 here.
    #[must_use]
    pub fn provider<T: Into<String>>(message: T, status_code: u16) -> Self {
        let message = message.into();
        let status_code = if message == PROVIDER_VALIDATION_MESSAGE {
            422
        } else {
            status_code
        };
        Self::Provider {
            message,
            status_code,
        }
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Provider { .. } | Self::Cache(_)
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for GifVaultError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for GifVaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `GifVaultError`.
    #[must_use]
    pub fn from_error(error: &GifVaultError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&GifVaultError> for ErrorResponse {
    fn from(error: &GifVaultError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(GifVaultError::not_found("Gif", "abc").status_code(), 404);
        assert_eq!(GifVaultError::validation("q is required").status_code(), 422);
        assert_eq!(GifVaultError::unauthorized("no token").status_code(), 401);
        assert_eq!(GifVaultError::forbidden("not your favorite").status_code(), 403);
        assert_eq!(GifVaultError::DuplicateFavorite.status_code(), 409);
        assert_eq!(GifVaultError::Mapping("missing field".to_string()).status_code(), 502);
        assert_eq!(GifVaultError::Database("gone".to_string()).status_code(), 500);
    }

    #[test]
    fn test_provider_error_keeps_upstream_status() {
        let err = GifVaultError::provider("API rate limit exceeded", 429);
        assert_eq!(err.status_code(), 429);
        assert_eq!(err.error_code(), "PROVIDER_ERROR");
    }

    #[test]
    fn test_provider_validation_message_forces_422() {
        // Upstream sends 500 with the validation message; 422 must win.
        let err = GifVaultError::provider("Validation error", 500);
        assert_eq!(err.status_code(), 422);

        let err = GifVaultError::provider("Validation error", 400);
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_provider_validation_message_match_is_exact() {
        let err = GifVaultError::provider("validation error", 500);
        assert_eq!(err.status_code(), 500);

        let err = GifVaultError::provider("Validation error!", 500);
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_duplicate_favorite_message() {
        let err = GifVaultError::DuplicateFavorite;
        assert_eq!(
            err.to_string(),
            "There is already a favorite GIF with this ID for this user."
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GifVaultError::not_found("Gif", "x").error_code(), "NOT_FOUND");
        assert_eq!(GifVaultError::DuplicateFavorite.error_code(), "DUPLICATE_FAVORITE");
        assert_eq!(GifVaultError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(
            GifVaultError::Mapping("bad".to_string()).error_code(),
            "PROVIDER_CONTRACT_ERROR"
        );
    }

    #[test]
    fn test_retriable_errors() {
        assert!(GifVaultError::Database("connection lost".to_string()).is_retriable());
        assert!(GifVaultError::provider("upstream down", 503).is_retriable());
        assert!(!GifVaultError::DuplicateFavorite.is_retriable());
        assert!(!GifVaultError::Mapping("bad".to_string()).is_retriable());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = GifVaultError::DuplicateFavorite;
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "DUPLICATE_FAVORITE");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = GifVaultError::validation("bad input");
        let details = vec![FieldError {
            field: "q".to_string(),
            message: "q is required".to_string(),
            code: "length".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.unwrap().len(), 1);
    }
}
