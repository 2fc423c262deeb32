//! In-memory session store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::session::Session;
use crate::traits::SessionStore;

/// In-memory session store for testing.
///
/// Clones share the stored session, so a test can keep a handle and
/// inspect what the application wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    session: Arc<Mutex<Option<Session>>>,
    save_should_fail: Arc<Mutex<bool>>,
    load_should_fail: Arc<Mutex<bool>>,
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemorySession {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `session`.
    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        store.set_session(Some(session));
        store
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Current stored session, read synchronously.
    pub fn get_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    /// Replace the stored session synchronously.
    pub fn set_session(&self, session: Option<Session>) {
        *self.session.lock().unwrap() = session;
    }
}

#[async_trait]
impl SessionStore for InMemorySession {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(StorageError::Other("Mock load failure".to_string()));
        }
        Ok(self.get_session())
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(StorageError::Other("Mock save failure".to_string()));
        }
        self.set_session(Some(session.clone()));
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(StorageError::Other("Mock clear failure".to_string()));
        }
        self.set_session(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_load_clear() {
        let store = InMemorySession::new();
        assert!(store.load().await.unwrap().is_none());

        store.save(&Session::new("tok", 3)).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(Session::new("tok", 3)));

        store.clear().await.unwrap();
        assert!(store.get_session().is_none());
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = InMemorySession::with_session(Session::new("tok", 3));
        store.set_load_should_fail(true);
        store.set_clear_should_fail(true);

        assert!(store.load().await.is_err());
        assert!(store.clear().await.is_err());
        assert!(store.get_session().is_some());
    }

    #[tokio::test]
    async fn test_save_failure_keeps_previous() {
        let store = InMemorySession::new();
        store.set_save_should_fail(true);
        assert!(store.save(&Session::new("tok", 1)).await.is_err());
        assert!(store.get_session().is_none());
    }
}
