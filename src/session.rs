//! Client-side login state.
//!
//! A [`Session`] is the pair of bearer token and user id written at login
//! and deleted at logout. It is never read ad hoc: the shell loads it from
//! the [`SessionStore`](crate::traits::SessionStore) on navigation
//! boundaries and hands a copy to each page it mounts.

use serde::{Deserialize, Serialize};

/// Stored credentials for the forum backend.
///
/// There is no expiry metadata; an expired token shows up as a 401 from the
/// backend and is reported like any other permission failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Bearer credential sent as `Authorization: Bearer <token>`.
    #[serde(default)]
    pub token: Option<String>,
    /// Id of the logged-in user.
    #[serde(default, rename = "userId")]
    pub user_id: Option<i64>,
}

impl Session {
    /// Empty (logged-out) session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for a freshly logged-in user.
    pub fn new(token: impl Into<String>, user_id: i64) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(user_id),
        }
    }

    /// Logged in means a token is present; the user id is not consulted.
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Whether this session belongs to the owner of a question.
    pub fn is_owner_of(&self, owner_id: i64) -> bool {
        self.user_id == Some(owner_id)
    }

    /// Whether nothing worth persisting is present.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user_id.is_none()
    }
}
