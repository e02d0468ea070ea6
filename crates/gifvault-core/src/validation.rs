//! Validation utilities.

use crate::{FieldError, GifVaultError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `GifVaultError` on failure.
    fn validate_request(&self) -> Result<(), GifVaultError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `GifVaultError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> GifVaultError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    GifVaultError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a provider GIF ID: ASCII letters, digits, `_` and `-`.
    pub fn valid_gif_id(id: &str) -> Result<(), ValidationError> {
        if id.is_empty() {
            return Err(ValidationError::new("gif_id_empty"));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::new("gif_id_invalid_characters"));
        }
        Ok(())
    }

    /// Validates a favorite alias: non-blank, at most 20 characters.
    pub fn valid_alias(alias: &str) -> Result<(), ValidationError> {
        if alias.trim().is_empty() {
            return Err(ValidationError::new("alias_blank"));
        }
        if alias.chars().count() > 20 {
            return Err(ValidationError::new("alias_too_long"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_valid_gif_id() {
        assert!(valid_gif_id("3o7aD2d7hy9ktXNDP2").is_ok());
        assert!(valid_gif_id("with_underscore-and-dash").is_ok());
        assert!(valid_gif_id("").is_err());
        assert!(valid_gif_id("has spaces").is_err());
        assert!(valid_gif_id("semi;colon").is_err());
    }

    #[test]
    fn test_valid_alias() {
        assert!(valid_alias("my favorite").is_ok());
        assert!(valid_alias("exactly twenty chars").is_ok());
        assert!(valid_alias("").is_err());
        assert!(valid_alias("this alias is far too long").is_err());
    }
}
