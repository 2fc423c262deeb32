use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_optional_timestamp;

/// A plain-text comment on an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub answer_id: Option<i64>,
    #[serde(default, alias = "user_id")]
    pub owner_id: Option<i64>,
    /// The backend's comment schema does not always carry this.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_without_timestamp() {
        let c: Comment =
            serde_json::from_value(json!({"id": 1, "content": "hi", "answer_id": 3, "owner_id": 2}))
                .unwrap();
        assert!(c.created_at.is_none());
        assert_eq!(c.answer_id, Some(3));
    }

    #[test]
    fn test_comment_with_timestamp() {
        let c: Comment = serde_json::from_value(
            json!({"id": 1, "content": "hi", "created_at": "2024-05-01T10:00:00"}),
        )
        .unwrap();
        assert!(c.created_at.is_some());
    }
}
