//! Navbar: brand, session-dependent links and the current page title.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::router::Route;
use crate::state::{NavAction, NavBar, NavItem};

use super::theme::{COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_INFO, COLOR_TEXT};

pub fn render_navbar(frame: &mut Frame, area: Rect, navbar: &NavBar, route: Route) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(
            "StackIt",
            Style::default()
                .fg(COLOR_BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for item in navbar.items() {
        spans.push(Span::styled(
            format!("[{}]", item.key),
            Style::default().fg(COLOR_INFO),
        ));
        spans.push(Span::styled(
            format!(" {}   ", item_label(&item, navbar.unread())),
            Style::default().fg(COLOR_TEXT),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    let title = Paragraph::new(Span::styled(route.title(), Style::default().fg(COLOR_DIM)))
        .alignment(Alignment::Right);
    frame.render_widget(title, inner);
}

/// Item text; the inbox carries its unread count when there is one.
fn item_label(item: &NavItem, unread: Option<u32>) -> String {
    match (item.action, unread) {
        (NavAction::Go(Route::Inbox), Some(count)) if count > 0 => {
            format!("{} ({})", item.label, count)
        }
        _ => item.label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_inbox_label_carries_unread_count() {
        let mut navbar = NavBar::from_session(&Session::new("t", 1));
        let labels = |navbar: &NavBar| -> Vec<String> {
            navbar
                .items()
                .iter()
                .map(|item| item_label(item, navbar.unread()))
                .collect()
        };
        assert!(labels(&navbar).contains(&"Inbox".to_string()));

        navbar.set_unread(0);
        assert!(labels(&navbar).contains(&"Inbox".to_string()));

        navbar.set_unread(3);
        assert!(labels(&navbar).contains(&"Inbox (3)".to_string()));
        assert!(labels(&navbar).contains(&"Logout".to_string()));
    }
}
