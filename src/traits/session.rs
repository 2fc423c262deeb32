//! Session storage trait abstraction.
//!
//! The `token`/`userId` pair lives behind [`SessionStore`] so the shell
//! can be tested with an in-memory store.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::session::Session;

/// Trait for session persistence.
///
/// Single load/save/clear calls are atomic from the caller's point of view;
/// no locking is layered on top.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session.
    ///
    /// # Returns
    /// - `Ok(Some(session))` if a session is stored
    /// - `Ok(None)` if nothing is stored
    /// - `Err(error)` if reading failed
    async fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Persist `session`, replacing whatever was stored.
    async fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Delete the stored session. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), StorageError>;
}
