//! Per-user notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, deserialize_optional_timestamp};

/// Something that happened to the user's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub message: String,
    /// `answer`, `comment`, `mention` or `vote`; other values pass through.
    #[serde(rename = "type", default, deserialize_with = "deserialize_nullable_string")]
    pub kind: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub related_question_id: Option<i64>,
    #[serde(default)]
    pub related_answer_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response of `GET /notifications/unread-count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u32,
}

/// `{"message": ...}` acknowledgement returned by the mutating routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notification_wire_shape() {
        let n: Notification = serde_json::from_value(json!({
            "id": 3,
            "message": "ana upvoted your answer",
            "type": "vote",
            "is_read": false,
            "related_question_id": 12,
            "related_answer_id": 40,
            "created_at": "2024-05-01T10:00:00"
        }))
        .unwrap();
        assert_eq!(n.kind, "vote");
        assert_eq!(n.related_question_id, Some(12));
        assert!(n.created_at.is_some());
    }

    #[test]
    fn test_sparse_notification() {
        let n: Notification =
            serde_json::from_value(json!({"id": 3, "message": null, "type": null})).unwrap();
        assert!(n.message.is_empty());
        assert!(n.kind.is_empty());
        assert!(!n.is_read);
        assert!(n.related_question_id.is_none());
    }
}
