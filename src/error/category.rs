//! Error category classification.
//!
//! Every failure the client can surface falls into one of these buckets,
//! which decide how it is presented and whether a manual retry makes sense.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input rejected before any request was issued.
    Validation,

    /// A request failed: transport error, non-success status or an
    /// undecodable body. Request-specific pending state is reset.
    Request,

    /// The action is not permitted for the current session. Normally
    /// prevented by not rendering the control; the backend has the final say.
    Permission,

    /// Local storage or terminal I/O failed.
    System,
}

impl ErrorCategory {
    /// Whether repeating the same action unchanged could succeed.
    ///
    /// Nothing is retried automatically; this only drives the hint shown to
    /// the user.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Request)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Request => "request",
            ErrorCategory::Permission => "permission",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Invalid input",
            ErrorCategory::Request => "Request failed",
            ErrorCategory::Permission => "Not allowed",
            ErrorCategory::System => "System error",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Please check your input and try again",
            ErrorCategory::Request => "Check your connection and try again",
            ErrorCategory::Permission => "Log in with an account that may perform this action",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
