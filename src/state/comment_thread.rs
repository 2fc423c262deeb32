//! Lazily loaded comment thread of one answer.
//!
//! ```text
//! collapsed ──expand (cache empty, never loaded)──▶ expanded+loading
//!     ▲                                                   │
//!     └──────────── load failed ◀─────────────────────────┤
//!                                                         ▼
//! collapsed ◀──────── collapse / expand ────────▶ expanded (cached)
//! ```
//!
//! Once comments have been loaded, or were seeded from the question
//! detail response, expanding again reuses the cache.

use crate::error::{require, Field, StackitResult};
use crate::models::{Comment, NewComment};
use crate::widgets::InputField;

#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    comments: Vec<Comment>,
    expanded: bool,
    loading: bool,
    loaded: bool,
    posting: bool,
    /// Comment being typed
    pub draft: InputField,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread whose cache starts with the comments nested in the answer.
    pub fn seeded(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            ..Self::default()
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_posting(&self) -> bool {
        self.posting
    }

    /// Expand the thread. Returns true if the caller must fetch comments.
    ///
    /// Only the first expansion of an unloaded, empty thread fetches; a
    /// thread collapsed mid-load reopens onto the pending read.
    pub fn expand(&mut self) -> bool {
        if self.expanded {
            return false;
        }
        self.expanded = true;
        if self.loading {
            return false;
        }
        if !self.loaded && self.comments.is_empty() {
            self.loading = true;
            return true;
        }
        false
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Flip between collapsed and expanded. Returns true if a fetch is needed.
    pub fn toggle(&mut self) -> bool {
        if self.expanded {
            self.collapse();
            false
        } else {
            self.expand()
        }
    }

    /// Install the fetched list. Comments posted locally that the server
    /// list does not carry yet stay appended after it.
    pub fn load_succeeded(&mut self, comments: Vec<Comment>) {
        self.loading = false;
        self.loaded = true;
        let local = std::mem::replace(&mut self.comments, comments);
        let missing: Vec<Comment> = local
            .into_iter()
            .filter(|c| !self.comments.iter().any(|s| s.id == c.id))
            .collect();
        self.comments.extend(missing);
    }

    /// Back to collapsed so toggling again retries.
    pub fn load_failed(&mut self) {
        self.loading = false;
        self.expanded = false;
    }

    /// Validate the draft and mark a post in flight.
    ///
    /// `Ok(None)` means a post is already in flight or the thread is still
    /// loading.
    pub fn begin_post(&mut self) -> StackitResult<Option<NewComment>> {
        if self.posting || self.loading {
            return Ok(None);
        }
        let content = require(Field::Comment, self.draft.content())?;
        self.posting = true;
        Ok(Some(NewComment { content }))
    }

    /// Append the created comment and clear the draft.
    pub fn post_succeeded(&mut self, comment: Comment) {
        self.posting = false;
        self.comments.push(comment);
        self.draft.clear();
    }

    /// Keep the draft so the user can resubmit.
    pub fn post_failed(&mut self) {
        self.posting = false;
    }
}
