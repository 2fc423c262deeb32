//! File-based session store.
//!
//! The session lives in `~/.stackit/session.json` (or under `STACKIT_HOME`)
//! as `{"token": "...", "userId": 5}`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::session::Session;
use crate::traits::SessionStore;

/// The session file name.
pub const SESSION_FILE: &str = "session.json";

/// Session store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session as `session.json` inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SESSION_FILE),
        }
    }

    /// Store the session at an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(operation: &'static str, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::io_error("read", &self.path, e)),
        };

        let session: Session = serde_json::from_slice(&bytes)?;
        if session.is_empty() {
            Ok(None)
        } else {
            Ok(Some(session))
        }
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::io_error("create", parent, e))?;
        }

        let json = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| Self::io_error("write", &self.path, e))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error("delete", &self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_creates_parent_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path().join("nested"));

        store.save(&Session::new("tok", 5)).await.unwrap();
        assert!(store.path().exists());

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("tok"));
        assert_eq!(loaded.user_id, Some(5));
    }

    #[tokio::test]
    async fn test_clear_removes_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        store.save(&Session::new("tok", 1)).await.unwrap();

        store.clear().await.unwrap();
        assert!(!store.path().exists());
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        std::fs::write(store.path(), "not json").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_empty_object_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        std::fs::write(store.path(), "{}").unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
