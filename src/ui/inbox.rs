//! Inbox page: notification list.
//!
//! ```text
//! ▌ ● ana answered your question
//! ▌   answer · 2 hours ago
//!     bo upvoted your answer
//!     vote · 3 days ago
//! ```

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::format::relative_date;
use crate::models::Notification;
use crate::state::{InboxPage, PageLoad};

use super::helpers::{scroll_to_show, truncate_to_width};
use super::home::render_centered;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_INFO, COLOR_SELECTED, COLOR_TEXT};

/// Lines of one notification entry, `width` columns wide including the gutter.
pub fn notification_lines(
    notification: &Notification,
    selected: bool,
    pending: bool,
    now: DateTime<Utc>,
    width: usize,
) -> Vec<Line<'static>> {
    let gutter = || {
        Span::styled(
            if selected { "▌ " } else { "  " },
            Style::default().fg(COLOR_SELECTED),
        )
    };
    let text_width = width.saturating_sub(4).max(1);

    let (marker, mut style) = if notification.is_read {
        ("  ", Style::default().fg(COLOR_DIM))
    } else {
        (
            "● ",
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )
    };
    if selected {
        style = style.fg(COLOR_SELECTED);
    }

    let mut meta = Vec::new();
    if !notification.kind.is_empty() {
        meta.push(notification.kind.clone());
    }
    if let Some(created_at) = notification.created_at {
        meta.push(relative_date(created_at, now));
    }
    let mut meta_line = vec![
        gutter(),
        Span::raw("  "),
        Span::styled(meta.join(" · "), Style::default().fg(COLOR_DIM)),
    ];
    if pending {
        meta_line.push(Span::styled("  updating...", Style::default().fg(COLOR_INFO)));
    }

    vec![
        Line::from(vec![
            gutter(),
            Span::styled(marker, Style::default().fg(COLOR_INFO)),
            Span::styled(truncate_to_width(&notification.message, text_width), style),
        ]),
        Line::from(meta_line),
        Line::default(),
    ]
}

pub fn render_inbox(frame: &mut Frame, area: Rect, page: &mut InboxPage, now: DateTime<Utc>) {
    let dim = |text: &'static str| Line::styled(text, Style::default().fg(COLOR_DIM));

    if !page.is_logged_in() {
        render_centered(frame, area, vec![dim("Log in to see your notifications.")]);
        return;
    }
    match &page.load {
        PageLoad::Loading => {
            render_centered(frame, area, vec![dim("Loading notifications...")]);
            return;
        }
        PageLoad::Failed => {
            render_centered(
                frame,
                area,
                vec![
                    Line::styled(
                        "Failed to load notifications",
                        Style::default().fg(COLOR_ERROR),
                    ),
                    dim("Press r to retry"),
                ],
            );
            return;
        }
        PageLoad::Ready(_) => {}
    }
    if page.is_empty() {
        render_centered(frame, area, vec![dim("No notifications yet.")]);
        return;
    }

    let width = area.width as usize;
    let mut lines = Vec::new();
    let mut selected_range = (0, 0);
    for (i, notification) in page.notifications().iter().enumerate() {
        let selected = i == page.selected;
        let entry = notification_lines(
            notification,
            selected,
            page.is_pending(notification.id),
            now,
            width,
        );
        if selected {
            selected_range = (lines.len(), lines.len() + entry.len());
        }
        lines.extend(entry);
    }

    page.scroll = scroll_to_show(
        page.scroll,
        selected_range.0,
        selected_range.1,
        area.height as usize,
    );
    frame.render_widget(Paragraph::new(lines).scroll((page.scroll, 0)), area);
}
