//! Unified error handling for the StackIt client.
//!
//! - **Error Categories**: validation, request, permission, system
//! - **Domain-specific Errors**: network, validation, permission, storage
//! - **Unified Error Type**: [`StackitError`] consolidates them
//! - **Result Type Alias**: [`StackitResult<T>`]
//!
//! | Category | Raised by | Retryable |
//! |----------|-----------|-----------|
//! | Validation | form checks, before any request | No |
//! | Request | transport errors, non-2xx, bad JSON | Yes |
//! | Permission | client guards, HTTP 401/403 | No |
//! | System | session file, terminal | No |
//!
//! No failure is fatal: the shell turns each one into a single transient
//! notification and resets whatever pending flag the request had set.

mod category;
mod network;
mod permission;
mod result;
mod stackit_error;
mod storage;
mod validation;

pub use category::ErrorCategory;
pub use network::NetworkError;
pub use permission::PermissionError;
pub use result::StackitResult;
pub use stackit_error::StackitError;
pub use storage::StorageError;
pub use validation::{require, Field, ValidationError};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_every_error_has_code_and_message() {
        let errors: Vec<StackitError> = vec![
            NetworkError::Timeout {
                url: "http://localhost:8000".to_string(),
            }
            .into(),
            ValidationError::Required(Field::Description).into(),
            PermissionError::NotQuestionOwner.into(),
            StorageError::Other("disk full".to_string()).into(),
        ];

        for err in errors {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
            assert!(!err.category().description().is_empty());
        }
    }
}
