//! Result type alias for client operations.

use super::stackit_error::StackitError;

/// Type alias for Results using [`StackitError`].
pub type StackitResult<T> = Result<T, StackitError>;
