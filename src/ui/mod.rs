//! UI rendering for the StackIt client.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ StackIt   [h] Home   [l] Login   [g] Register  Title │  navbar
//! └──────────────────────────────────────────────────────┘
//!   page body                               ┌─ toast ─┐
//!                                           └─────────┘
//!  ↑↓ select  enter open  r reload  q quit                  footer
//! ```

mod detail;
mod forms;
mod helpers;
mod home;
mod inbox;
mod navbar;
mod theme;
mod toasts;

pub use detail::{answer_card_lines, answer_count_label, CardView};
pub use helpers::{truncate_to_width, wrap_text};
pub use home::question_card_lines;

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::{DetailFocus, Page};

use detail::render_detail;
use forms::{render_ask, render_login, render_register};
use helpers::keybind_spans;
use home::render_home;
use inbox::render_inbox;
use navbar::render_navbar;
use toasts::render_toasts;

/// Render the whole screen for the mounted page.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_navbar(frame, chunks[0], &app.navbar, app.route());

    let body = inset(chunks[1]);
    match &mut app.page {
        Page::Home(page) => render_home(frame, body, page, Utc::now()),
        Page::Ask(page) => render_ask(frame, body, page),
        Page::Detail(page) => render_detail(frame, body, page),
        Page::Login(page) => render_login(frame, body, page),
        Page::Register(page) => render_register(frame, body, page),
        Page::Inbox(page) => render_inbox(frame, body, page, Utc::now()),
    }

    frame.render_widget(
        Paragraph::new(Line::from(keybind_spans(&keybinds(&app.page)))),
        inset(chunks[2]),
    );

    render_toasts(frame, area, &app.notifications);
}

/// Footer hints for the mounted page.
fn keybinds(page: &Page) -> Vec<(&'static str, &'static str)> {
    match page {
        Page::Home(_) => vec![
            ("↑↓", "select"),
            ("enter", "open"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Page::Detail(detail) => match detail.focus {
            DetailFocus::Answers => vec![
                ("↑↓", "select"),
                ("c", "comments"),
                ("x", "accept"),
                ("w", "answer"),
                ("m", "comment"),
                ("u/d", "vote"),
                ("esc", "back"),
            ],
            DetailFocus::AnswerEditor => vec![("ctrl+s", "submit"), ("esc", "leave editor")],
            DetailFocus::CommentEditor => vec![("enter", "post"), ("esc", "cancel")],
        },
        Page::Inbox(_) => vec![
            ("↑↓", "select"),
            ("enter", "open"),
            ("m", "mark read"),
            ("M", "mark all read"),
            ("x", "delete"),
            ("esc", "back"),
        ],
        Page::Ask(_) => vec![("tab", "next field"), ("ctrl+s", "post"), ("esc", "cancel")],
        Page::Login(_) | Page::Register(_) => {
            vec![("tab", "next field"), ("enter", "submit"), ("esc", "cancel")]
        }
    }
}

/// One column of padding left and right.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use crate::session::Session;

    #[test]
    fn test_keybinds_follow_detail_focus() {
        let mut page = Page::for_route(Route::Question(1), &Session::anonymous());
        assert!(keybinds(&page).contains(&("x", "accept")));

        if let Page::Detail(detail) = &mut page {
            detail.focus = DetailFocus::CommentEditor;
        }
        assert_eq!(keybinds(&page), vec![("enter", "post"), ("esc", "cancel")]);
    }

    #[test]
    fn test_inset() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(inset(area), Rect::new(1, 0, 8, 5));
    }
}
