//! Unified error type for the StackIt client.

use std::fmt;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::permission::PermissionError;
use super::storage::StorageError;
use super::validation::ValidationError;

/// Unified error type.
///
/// Every fallible client operation returns this, so the shell can turn any
/// failure into exactly one notification without knowing where it came from.
#[derive(Debug)]
pub enum StackitError {
    /// Request failures (transport, status, decoding).
    Network(NetworkError),

    /// Input rejected before a request was made.
    Validation(ValidationError),

    /// Action refused by a client-side guard.
    Permission(PermissionError),

    /// Session storage failures.
    Storage(StorageError),
}

impl StackitError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            StackitError::Network(err) if err.is_permission_denied() => ErrorCategory::Permission,
            StackitError::Network(_) => ErrorCategory::Request,
            StackitError::Validation(_) => ErrorCategory::Validation,
            StackitError::Permission(_) => ErrorCategory::Permission,
            StackitError::Storage(_) => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StackitError::Network(err) => err.user_message(),
            StackitError::Validation(err) => err.user_message(),
            StackitError::Permission(err) => err.user_message(),
            StackitError::Storage(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StackitError::Network(err) => err.error_code(),
            StackitError::Validation(err) => err.error_code(),
            StackitError::Permission(err) => err.error_code(),
            StackitError::Storage(err) => err.error_code(),
        }
    }

    /// Check if repeating the action could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            StackitError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }
}

impl fmt::Display for StackitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackitError::Network(err) => write!(f, "{}", err),
            StackitError::Validation(err) => write!(f, "{}", err),
            StackitError::Permission(err) => write!(f, "{}", err),
            StackitError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StackitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StackitError::Network(err) => Some(err),
            StackitError::Validation(err) => Some(err),
            StackitError::Permission(err) => Some(err),
            StackitError::Storage(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<NetworkError> for StackitError {
    fn from(err: NetworkError) -> Self {
        StackitError::Network(err)
    }
}

impl From<ValidationError> for StackitError {
    fn from(err: ValidationError) -> Self {
        StackitError::Validation(err)
    }
}

impl From<PermissionError> for StackitError {
    fn from(err: PermissionError) -> Self {
        StackitError::Permission(err)
    }
}

impl From<StorageError> for StackitError {
    fn from(err: StorageError) -> Self {
        StackitError::Storage(err)
    }
}

impl From<serde_json::Error> for StackitError {
    fn from(err: serde_json::Error) -> Self {
        StackitError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
