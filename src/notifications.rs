//! Transient in-app notifications.
//!
//! Every success and failure the user should hear about becomes one
//! [`Toast`]. Toasts stack oldest first in the top-right corner and are
//! pruned on the UI tick once they are older than [`TOAST_TTL`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::error::{ErrorCategory, StackitError};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One transient message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= TOAST_TTL
    }
}

/// Queue of visible toasts.
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    /// Report a failure, using `fallback` for request errors that carry no
    /// backend detail worth showing.
    pub fn report(&mut self, err: &StackitError, fallback: &str) {
        tracing::warn!(code = err.error_code(), "{}", err);
        let message = match err.category() {
            ErrorCategory::Request => fallback.to_string(),
            _ => err.user_message(),
        };
        self.error(message);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        tracing::debug!(?kind, "toast: {}", message);
        self.toasts.push_back(Toast {
            kind,
            message,
            created_at: Instant::now(),
        });
    }

    /// Drop toasts older than [`TOAST_TTL`]. Returns true if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts.len() != before
    }

    /// Visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Messages of the visible toasts, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.message.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
