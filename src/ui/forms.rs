//! Ask, login and register forms.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::state::{AskField, AskPage, LoginField, LoginPage, RegisterField, RegisterPage};
use crate::widgets::InputFieldWidget;

use super::helpers::centered_rect;
use super::theme::{COLOR_DIM, COLOR_TEXT};

/// Width of the centered login/register box.
const AUTH_FORM_WIDTH: u16 = 50;

pub fn render_ask(frame: &mut Frame, area: Rect, page: &AskPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        InputFieldWidget::new(&page.title, " Title ", page.focus == AskField::Title)
            .placeholder("e.g. How do I share state between threads?"),
        chunks[0],
    );
    frame.render_widget(
        InputFieldWidget::new(
            &page.tags,
            " Tags (comma separated) ",
            page.focus == AskField::Tags,
        )
        .placeholder("e.g. rust, concurrency"),
        chunks[1],
    );
    frame.render_widget(
        InputFieldWidget::new(
            &page.description,
            " Description ",
            page.focus == AskField::Description,
        )
        .placeholder("Describe your problem in detail"),
        chunks[2],
    );

    let status = if page.is_submitting() {
        "Posting..."
    } else {
        "Ctrl+S post question"
    };
    frame.render_widget(
        Paragraph::new(Line::styled(status, Style::default().fg(COLOR_DIM))),
        chunks[3],
    );
}

pub fn render_login(frame: &mut Frame, area: Rect, page: &LoginPage) {
    let form = centered_rect(AUTH_FORM_WIDTH, 10, area);
    let chunks = auth_rows(form, 2);

    render_heading(frame, chunks[0], "Log in to StackIt");
    frame.render_widget(
        InputFieldWidget::new(&page.email, " Email ", page.focus == LoginField::Email),
        chunks[1],
    );
    frame.render_widget(
        InputFieldWidget::new(
            &page.password,
            " Password ",
            page.focus == LoginField::Password,
        ),
        chunks[2],
    );
    render_status(frame, chunks[3], page.is_submitting(), "Logging in...", "Enter log in");
}

pub fn render_register(frame: &mut Frame, area: Rect, page: &RegisterPage) {
    let form = centered_rect(AUTH_FORM_WIDTH, 13, area);
    let chunks = auth_rows(form, 3);

    render_heading(frame, chunks[0], "Create an account");
    frame.render_widget(
        InputFieldWidget::new(
            &page.username,
            " Username ",
            page.focus == RegisterField::Username,
        ),
        chunks[1],
    );
    frame.render_widget(
        InputFieldWidget::new(&page.email, " Email ", page.focus == RegisterField::Email),
        chunks[2],
    );
    frame.render_widget(
        InputFieldWidget::new(
            &page.password,
            " Password ",
            page.focus == RegisterField::Password,
        ),
        chunks[3],
    );
    render_status(frame, chunks[4], page.is_submitting(), "Registering...", "Enter register");
}

/// Heading row, `fields` three-row inputs and a status row.
fn auth_rows(area: Rect, fields: usize) -> std::rc::Rc<[Rect]> {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(fields));
    constraints.push(Constraint::Length(1));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
}

fn render_heading(frame: &mut Frame, area: Rect, text: &'static str) {
    frame.render_widget(
        Paragraph::new(Line::styled(
            text,
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, busy: bool, busy_text: &str, idle_text: &str) {
    let text = if busy { busy_text } else { idle_text };
    frame.render_widget(
        Paragraph::new(Line::styled(text.to_string(), Style::default().fg(COLOR_DIM))),
        area,
    );
}
