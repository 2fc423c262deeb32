//! Conversion between editor HTML and terminal text.
//!
//! Question bodies and answers are stored as HTML. The terminal shows them
//! as plain text and sends typed text back wrapped in paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;

static BREAK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("Invalid break regex pattern"));

static LIST_ITEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<li(\s[^>]*)?>").expect("Invalid list item regex pattern"));

static BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(p|div|pre|ul|ol|blockquote|h[1-6])(\s[^>]*)?>")
        .expect("Invalid block regex pattern")
});

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex pattern"));

static NUMERIC_ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("Invalid numeric entity regex pattern")
});

/// Render editor HTML as plain text lines.
///
/// Opening block tags start a new line, list items get a bullet, other tags are
/// dropped and runs of blank lines collapse to one.
pub fn html_to_text(html: &str) -> String {
    let text = html.replace("\r\n", "\n");
    let text = BREAK_REGEX.replace_all(&text, "\n");
    let text = LIST_ITEM_REGEX.replace_all(&text, "\n• ");
    let text = BLOCK_REGEX.replace_all(&text, "\n");
    let text = TAG_REGEX.replace_all(&text, "");
    let text = decode_entities(&text);

    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        let blank = line.trim().is_empty();
        if blank && lines.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        lines.push(if blank { "" } else { line });
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Wrap typed text as editor HTML, one escaped paragraph per line.
pub fn text_to_html(text: &str) -> String {
    text.trim()
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                "<p><br></p>".to_string()
            } else {
                format!("<p>{}</p>", escape(line))
            }
        })
        .collect()
}

/// Escape text for inclusion in HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    let text = NUMERIC_ENTITY_REGEX.replace_all(text, |caps: &regex::Captures| {
        let raw = &caps[1];
        let code = match raw.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => raw.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    // &amp; last so "&amp;lt;" stays "&lt;"
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_lines() {
        assert_eq!(html_to_text("<p>first</p><p>second</p>"), "first\nsecond");
    }

    #[test]
    fn test_inline_tags_stripped() {
        assert_eq!(
            html_to_text("<p>use <strong>Arc</strong> and <em>Mutex</em></p>"),
            "use Arc and Mutex"
        );
    }

    #[test]
    fn test_list_items_get_bullets() {
        assert_eq!(
            html_to_text("<ul><li>one</li><li>two</li></ul>"),
            "• one\n• two"
        );
    }

    #[test]
    fn test_blank_runs_collapse() {
        assert_eq!(
            html_to_text("<p>a</p><p><br></p><p><br></p><p>b</p>"),
            "a\n\nb"
        );
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(
            html_to_text("<p>a &lt; b &amp;&amp; c&nbsp;&#62; d &#x41;</p>"),
            "a < b && c > d A"
        );
        assert_eq!(html_to_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(html_to_text("just text"), "just text");
        assert_eq!(html_to_text(""), "");
    }

    #[test]
    fn test_text_to_html_escapes_each_line() {
        assert_eq!(
            text_to_html("  a < b\n\nc & d  "),
            "<p>a &lt; b</p><p><br></p><p>c &amp; d</p>"
        );
    }

    #[test]
    fn test_text_html_text_keeps_content() {
        let typed = "line one\nline <two>";
        assert_eq!(html_to_text(&text_to_html(typed)), typed);
    }
}
