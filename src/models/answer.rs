use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    deserialize_nullable_string, deserialize_nullable_vec, deserialize_timestamp, Comment,
};

/// An answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    /// HTML produced by the editor.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub question_id: Option<i64>,
    #[serde(default, alias = "user_id")]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub is_accepted: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Comments nested in the detail response. Absent or `null` is empty.
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub comments: Vec<Comment>,
}
