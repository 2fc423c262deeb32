use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    deserialize_nullable_string, deserialize_nullable_vec, deserialize_timestamp, parse_tags,
    Answer,
};

/// A question as returned by `/questions/`.
///
/// List responses omit `answers`; the detail response nests them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub title: String,
    /// HTML produced by the editor.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    /// Comma-delimited tag string; see [`Question::tag_list`].
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub tags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "user_id")]
    pub owner_id: Option<i64>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Tags split for display.
    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_item_without_answers() {
        let q: Question = serde_json::from_value(json!({
            "id": 1,
            "title": "Why?",
            "description": "<p>x</p>",
            "tags": "go, rust",
            "owner_id": 5,
            "created_at": "2024-01-02T03:04:05"
        }))
        .unwrap();

        assert!(q.answers.is_empty());
        assert_eq!(q.owner_id, Some(5));
        assert_eq!(q.tag_list(), vec!["go", "rust"]);
    }

    #[test]
    fn test_detail_with_nested_answers_and_null_comments() {
        let q: Question = serde_json::from_value(json!({
            "id": 42,
            "title": "t",
            "description": "d",
            "tags": null,
            "owner_id": 5,
            "created_at": "2024-01-02T03:04:05Z",
            "answers": [
                {"id": 1, "content": "a", "is_accepted": false, "created_at": "2024-01-03T00:00:00", "comments": null},
                {"id": 2, "content": "b", "is_accepted": true, "created_at": "2024-01-03T00:00:00"}
            ]
        }))
        .unwrap();

        assert_eq!(q.tags, "");
        assert_eq!(q.answers.len(), 2);
        assert!(q.answers.iter().all(|a| a.comments.is_empty()));
    }
}
