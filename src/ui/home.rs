//! Home page: question cards.
//!
//! ```text
//! ▌ How do I share state between threads?
//! ▌ I have a struct that several tasks need to update and the
//! ▌ compiler keeps telling me it is not Send...
//! ▌  rust   concurrency
//! ▌ asked 3 days ago
//! ```

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::format::relative_date;
use crate::html::html_to_text;
use crate::models::Question;
use crate::state::{HomePage, PageLoad};

use super::helpers::{clamp_lines, scroll_to_show, tag_badges, truncate_to_width};
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SELECTED, COLOR_TEXT};

/// Description preview height on a card.
const PREVIEW_LINES: usize = 3;

/// Lines of one question card, `width` columns wide including the gutter.
pub fn question_card_lines(
    question: &Question,
    selected: bool,
    now: DateTime<Utc>,
    width: usize,
) -> Vec<Line<'static>> {
    let gutter_style = if selected {
        Style::default().fg(COLOR_SELECTED)
    } else {
        Style::default()
    };
    let gutter = || Span::styled(if selected { "▌ " } else { "  " }, gutter_style);
    let text_width = width.saturating_sub(2).max(1);

    let mut title_style = Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.fg(COLOR_SELECTED);
    }

    let mut lines = vec![Line::from(vec![
        gutter(),
        Span::styled(truncate_to_width(&question.title, text_width), title_style),
    ])];

    let preview = html_to_text(&question.description);
    for text in clamp_lines(&preview, text_width, PREVIEW_LINES) {
        lines.push(Line::from(vec![
            gutter(),
            Span::styled(text, Style::default().fg(COLOR_TEXT)),
        ]));
    }

    let tags = question.tag_list();
    if !tags.is_empty() {
        let mut badges = tag_badges(&tags);
        badges.spans.insert(0, gutter());
        lines.push(badges);
    }

    lines.push(Line::from(vec![
        gutter(),
        Span::styled(
            format!("asked {}", relative_date(question.created_at, now)),
            Style::default().fg(COLOR_DIM),
        ),
    ]));
    lines.push(Line::default());
    lines
}

pub fn render_home(frame: &mut Frame, area: Rect, page: &mut HomePage, now: DateTime<Utc>) {
    match &page.load {
        PageLoad::Loading => {
            render_centered(frame, area, vec![dim_line("Loading questions...")]);
            return;
        }
        PageLoad::Failed => {
            render_centered(
                frame,
                area,
                vec![
                    Line::styled("Failed to load questions", Style::default().fg(COLOR_ERROR)),
                    dim_line("Press r to retry"),
                ],
            );
            return;
        }
        PageLoad::Ready(_) => {}
    }

    if page.is_empty() {
        render_centered(
            frame,
            area,
            vec![
                Line::styled(
                    "No questions yet",
                    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
                ),
                dim_line("Be the first to ask a question and start the discussion!"),
            ],
        );
        return;
    }

    let width = area.width as usize;
    let mut lines = Vec::new();
    let mut selected_range = (0, 0);
    for (i, question) in page.questions().iter().enumerate() {
        let selected = i == page.selected;
        let card = question_card_lines(question, selected, now, width);
        if selected {
            selected_range = (lines.len(), lines.len() + card.len());
        }
        lines.extend(card);
    }

    page.scroll = scroll_to_show(
        page.scroll,
        selected_range.0,
        selected_range.1,
        area.height as usize,
    );
    frame.render_widget(Paragraph::new(lines).scroll((page.scroll, 0)), area);
}

fn dim_line(text: &'static str) -> Line<'static> {
    Line::styled(text, Style::default().fg(COLOR_DIM))
}

/// Vertically centered message block.
pub(super) fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let target = Rect {
        y: top,
        height: height.min(area.height),
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question(description: &str, tags: &str) -> Question {
        serde_json::from_value(json!({
            "id": 1,
            "title": "Why?",
            "description": description,
            "tags": tags,
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap()
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_shows_title_preview_tags_and_age() {
        let q = question("<p>x</p>", "go, rust");
        let now = q.created_at + chrono::Duration::days(3);
        let lines = question_card_lines(&q, false, now, 40);
        let texts: Vec<String> = lines.iter().map(text).collect();

        assert_eq!(texts[0], "  Why?");
        assert_eq!(texts[1], "  x");
        assert_eq!(texts[2], "   go   rust ");
        assert_eq!(texts[3], "  asked 3 days ago");
    }

    #[test]
    fn test_preview_is_clamped_to_three_lines() {
        let q = question("<p>a</p><p>b</p><p>c</p><p>d</p>", "");
        let lines = question_card_lines(&q, true, q.created_at, 40);
        let texts: Vec<String> = lines.iter().map(text).collect();

        assert_eq!(texts[1], "▌ a");
        assert_eq!(texts[3], "▌ c…");
        // No tag line when there are no tags
        assert_eq!(texts[4], "▌ asked today");
    }
}
