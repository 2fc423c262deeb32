//! Toast overlay in the top-right corner.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::notifications::{Notifications, ToastKind};

use super::helpers::wrap_text;
use super::theme::{COLOR_ACCEPTED, COLOR_ERROR, COLOR_INFO, COLOR_TEXT, COLOR_TOAST_BG};

const TOAST_WIDTH: u16 = 44;

fn kind_color(kind: ToastKind) -> ratatui::style::Color {
    match kind {
        ToastKind::Success => COLOR_ACCEPTED,
        ToastKind::Error => COLOR_ERROR,
        ToastKind::Info => COLOR_INFO,
    }
}

/// Stack toasts oldest first from the top of `area`, right-aligned.
pub fn render_toasts(frame: &mut Frame, area: Rect, notifications: &Notifications) {
    let width = TOAST_WIDTH.min(area.width);
    if width < 5 {
        return;
    }
    let x = area.x + area.width - width;
    let mut y = area.y;

    for toast in notifications.iter() {
        let lines: Vec<Line> = wrap_text(&toast.message, width.saturating_sub(4) as usize)
            .into_iter()
            .map(|l| Line::styled(l, Style::default().fg(COLOR_TEXT)))
            .collect();
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }

        let rect = Rect::new(x, y, width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(kind_color(toast.kind)))
            .style(Style::default().bg(COLOR_TOAST_BG));
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(lines).block(block), rect);
        y += height;
    }
}
