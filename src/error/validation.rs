//! Client-side input validation errors.
//!
//! These are raised before any request is made, so a rejected form never
//! costs a round trip.

use std::fmt;

/// A form field that must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Answer,
    Comment,
    Username,
    Email,
    Password,
}

impl Field {
    /// Lowercase field name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Answer => "answer",
            Field::Comment => "comment",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Prompt shown when the field is left empty.
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Title => "Please enter a title",
            Field::Description => "Please enter a description",
            Field::Answer => "Please enter an answer",
            Field::Comment => "Please enter a comment",
            Field::Username => "Please enter a username",
            Field::Email => "Please enter your email",
            Field::Password => "Please enter your password",
        }
    }
}

/// Validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    Required(Field),
}

impl ValidationError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::Required(field) => field.prompt().to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Required(_) => "E_VALIDATION_REQUIRED",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required(field) => write!(f, "{} is required", field.name()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `value` and reject it if nothing is left.
pub fn require(field: Field, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trims() {
        assert_eq!(require(Field::Title, "  Why?  ").unwrap(), "Why?");
    }

    #[test]
    fn test_require_rejects_whitespace() {
        let err = require(Field::Comment, " \t\n ").unwrap_err();
        assert_eq!(err, ValidationError::Required(Field::Comment));
        assert_eq!(err.user_message(), "Please enter a comment");
        assert_eq!(err.to_string(), "comment is required");
    }
}
