//! Wire types for the forum backend.
//!
//! Questions, answers and comments are decoded leniently: collections that
//! are absent or `null` become empty, and timestamps are accepted with or
//! without a UTC offset.

mod answer;
mod comment;
mod notification;
mod question;
mod requests;
mod tags;
mod user;
mod vote;

pub use answer::Answer;
pub use comment::Comment;
pub use notification::{Notification, StatusMessage, UnreadCount};
pub use question::Question;
pub use requests::{LoginRequest, NewAnswer, NewComment, NewQuestion, RegisterRequest, TokenResponse};
pub use tags::parse_tags;
pub use user::User;
pub use vote::{VoteOutcome, VoteRequest, VoteTally, VoteType};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a backend timestamp.
///
/// RFC 3339 strings are converted to UTC; naive ISO-8601 strings (the
/// backend serialises naive datetimes) are taken to be UTC already.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

/// Like [`deserialize_timestamp`] but missing or `null` becomes `None`.
pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw))),
    }
}

/// Helper to deserialize nullable strings as empty string
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize nullable lists as an empty `Vec`
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_naive_timestamp_as_utc() {
        let ts = parse_timestamp("2024-03-01T12:30:00.123456").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 12);
    }

    #[test]
    fn test_parse_offset_timestamp_converts() {
        let ts = parse_timestamp("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }
}
