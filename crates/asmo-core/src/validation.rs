//! Validation utilities.

use crate::{AsmoError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `AsmoError` on failure.
    fn validate_request(&self) -> Result<(), AsmoError> {
        self.validate().map_err(validation_errors_to_asmo_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `AsmoError::InvalidInput`.
///
/// Fields are sorted by name so the message is stable across runs.
#[must_use]
pub fn validation_errors_to_asmo_error(errors: ValidationErrors) -> AsmoError {
    let mut details: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    details.sort_by(|a, b| a.field.cmp(&b.field));

    let message = details
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    AsmoError::InvalidInput { message, details }
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
}
