//! Text layout helpers shared by the page renderers.
//!
//! Widths are display columns, not chars, so CJK and emoji line up.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{COLOR_DIM, COLOR_INFO, COLOR_TAG_BG, COLOR_TAG_FG};

/// Cut `text` to `max_width` columns, ending with `…` when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns.
///
/// Existing line breaks are kept; words wider than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in raw.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if line_width > 0 && line_width + ch_width > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        lines.push(line);
    }
    lines
}

/// At most `max_lines` wrapped lines, the last one marked `…` if cut.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = wrap_text(text, width)
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let cut = truncate_to_width(last, width.saturating_sub(1));
            *last = if cut.ends_with('…') { cut } else { format!("{}…", cut) };
        }
    }
    lines
}

/// Tag badges on one line: ` go ` ` rust `.
pub fn tag_badges(tags: &[String]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", tag),
            Style::default().fg(COLOR_TAG_FG).bg(COLOR_TAG_BG),
        ));
    }
    Line::from(spans)
}

/// Keybind hint spans: `key` highlighted, `label` dim.
pub fn keybind_spans(binds: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (key, label)) in binds.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(COLOR_INFO)));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(COLOR_DIM),
        ));
    }
    spans
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Scroll offset that keeps lines `start..end` inside a `height`-line view.
pub fn scroll_to_show(current: u16, start: usize, end: usize, height: usize) -> u16 {
    let current = current as usize;
    let offset = if start < current {
        start
    } else if end > current + height {
        end.saturating_sub(height).min(start)
    } else {
        current
    };
    offset.min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 0), "");
        // Wide chars count two columns
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_clamp_lines_marks_cut() {
        let lines = clamp_lines("one two three four five six", 9, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));

        assert_eq!(clamp_lines("short", 20, 3), vec!["short"]);
    }

    #[test]
    fn test_tag_badges() {
        let line = tag_badges(&["go".to_string(), "rust".to_string()]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " go   rust ");
    }

    #[test]
    fn test_scroll_to_show() {
        assert_eq!(scroll_to_show(0, 2, 5, 10), 0);
        assert_eq!(scroll_to_show(0, 12, 15, 10), 5);
        assert_eq!(scroll_to_show(8, 2, 5, 10), 2);
        // Taller than the view: show its top
        assert_eq!(scroll_to_show(0, 12, 40, 10), 12);
    }
}
