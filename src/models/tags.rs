//! Tag strings.
//!
//! Tags travel as one comma-delimited string and are split for display.

/// Split a delimited tag string.
///
/// Segments are trimmed, empty ones dropped and duplicates collapsed
/// keeping the first occurrence.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
