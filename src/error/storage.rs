//! Session storage errors.

use std::path::PathBuf;

/// Failures reading or writing the persisted session.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Filesystem operation failed.
    #[error("failed to {operation} '{}': {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored session could not be (de)serialized.
    #[error("invalid session data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Injected failure (in-memory store).
    #[error("storage error: {0}")]
    Other(String),
}

impl StorageError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StorageError::NoHomeDirectory => {
                "Could not find a home directory to store the session.".to_string()
            }
            StorageError::Io { operation, .. } => {
                format!("Could not {} the session file.", operation)
            }
            StorageError::Serialization(_) => "The stored session is corrupted.".to_string(),
            StorageError::Other(message) => message.clone(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::NoHomeDirectory => "E_SYS_NO_HOME",
            StorageError::Io { .. } => "E_SYS_IO",
            StorageError::Serialization(_) => "E_SYS_SERDE",
            StorageError::Other(_) => "E_SYS_OTHER",
        }
    }
}
