//! AppMessage enum for async communication within the application.

use crate::error::StackitResult;
use crate::models::{
    Answer, Comment, Notification, Question, StatusMessage, UnreadCount, User, VoteOutcome,
    VoteTally,
};
use crate::session::Session;

/// Results of spawned requests, sent back to the event loop.
///
/// Every variant carries the mount generation of the page that issued the
/// request. Page-bound results for a page that has since been replaced are
/// dropped; the rest also feed the navbar badge and always apply.
#[derive(Debug)]
pub enum AppMessage {
    /// Home page list read finished
    QuestionsLoaded {
        generation: u64,
        result: StackitResult<Vec<Question>>,
    },
    /// Detail page read finished
    QuestionLoaded {
        generation: u64,
        result: StackitResult<Question>,
    },
    /// Ask form submission finished
    QuestionCreated {
        generation: u64,
        result: StackitResult<Question>,
    },
    /// Answer editor submission finished
    AnswerCreated {
        generation: u64,
        result: StackitResult<Answer>,
    },
    /// Accept request for `answer_id` finished
    AnswerAccepted {
        generation: u64,
        answer_id: i64,
        result: StackitResult<Answer>,
    },
    /// Lazy comment read for `answer_id` finished
    CommentsLoaded {
        generation: u64,
        answer_id: i64,
        result: StackitResult<Vec<Comment>>,
    },
    /// Comment post on `answer_id` finished
    CommentCreated {
        generation: u64,
        answer_id: i64,
        result: StackitResult<Comment>,
    },
    /// Vote counts for `answer_id` read
    VotesLoaded {
        generation: u64,
        answer_id: i64,
        result: StackitResult<VoteTally>,
    },
    /// Vote on `answer_id` finished
    VoteCast {
        generation: u64,
        answer_id: i64,
        result: StackitResult<VoteOutcome>,
    },
    /// Navbar badge read finished
    UnreadCountLoaded {
        generation: u64,
        result: StackitResult<UnreadCount>,
    },
    /// Inbox list read finished
    NotificationsLoaded {
        generation: u64,
        result: StackitResult<Vec<Notification>>,
    },
    /// Mark-read for notification `id` finished
    NotificationRead {
        generation: u64,
        id: i64,
        result: StackitResult<StatusMessage>,
    },
    /// Mark-all-read finished
    AllNotificationsRead {
        generation: u64,
        result: StackitResult<StatusMessage>,
    },
    /// Delete of notification `id` finished
    NotificationDeleted {
        generation: u64,
        id: i64,
        result: StackitResult<StatusMessage>,
    },
    /// Login, identity lookup and session save finished
    LoggedIn {
        generation: u64,
        result: StackitResult<Session>,
    },
    /// Registration finished
    Registered {
        generation: u64,
        result: StackitResult<User>,
    },
}

impl AppMessage {
    /// Mount generation of the page that issued the request.
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::QuestionsLoaded { generation, .. }
            | AppMessage::QuestionLoaded { generation, .. }
            | AppMessage::QuestionCreated { generation, .. }
            | AppMessage::AnswerCreated { generation, .. }
            | AppMessage::AnswerAccepted { generation, .. }
            | AppMessage::CommentsLoaded { generation, .. }
            | AppMessage::CommentCreated { generation, .. }
            | AppMessage::VotesLoaded { generation, .. }
            | AppMessage::VoteCast { generation, .. }
            | AppMessage::UnreadCountLoaded { generation, .. }
            | AppMessage::NotificationsLoaded { generation, .. }
            | AppMessage::NotificationRead { generation, .. }
            | AppMessage::AllNotificationsRead { generation, .. }
            | AppMessage::NotificationDeleted { generation, .. }
            | AppMessage::LoggedIn { generation, .. }
            | AppMessage::Registered { generation, .. } => *generation,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::QuestionsLoaded { .. } => "questions_loaded",
            AppMessage::QuestionLoaded { .. } => "question_loaded",
            AppMessage::QuestionCreated { .. } => "question_created",
            AppMessage::AnswerCreated { .. } => "answer_created",
            AppMessage::AnswerAccepted { .. } => "answer_accepted",
            AppMessage::CommentsLoaded { .. } => "comments_loaded",
            AppMessage::CommentCreated { .. } => "comment_created",
            AppMessage::VotesLoaded { .. } => "votes_loaded",
            AppMessage::VoteCast { .. } => "vote_cast",
            AppMessage::UnreadCountLoaded { .. } => "unread_count_loaded",
            AppMessage::NotificationsLoaded { .. } => "notifications_loaded",
            AppMessage::NotificationRead { .. } => "notification_read",
            AppMessage::AllNotificationsRead { .. } => "all_notifications_read",
            AppMessage::NotificationDeleted { .. } => "notification_deleted",
            AppMessage::LoggedIn { .. } => "logged_in",
            AppMessage::Registered { .. } => "registered",
        }
    }

    /// Whether the result only matters to the page that issued it.
    pub fn is_page_bound(&self) -> bool {
        !matches!(
            self,
            AppMessage::UnreadCountLoaded { .. }
                | AppMessage::NotificationRead { .. }
                | AppMessage::AllNotificationsRead { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    fn failed<T>() -> StackitResult<T> {
        Err(NetworkError::from_status(500, "").into())
    }

    #[test]
    fn test_badge_updates_outlive_their_page() {
        let badge = AppMessage::UnreadCountLoaded {
            generation: 1,
            result: failed(),
        };
        let read = AppMessage::NotificationRead {
            generation: 1,
            id: 3,
            result: failed(),
        };
        let list = AppMessage::NotificationsLoaded {
            generation: 1,
            result: failed(),
        };
        assert!(!badge.is_page_bound());
        assert!(!read.is_page_bound());
        assert!(list.is_page_bound());
        assert_eq!(read.kind(), "notification_read");
        assert_eq!(read.generation(), 1);
    }
}
