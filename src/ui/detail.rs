//! Question detail page: question, answer cards and the answer editor.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::format::absolute_date;
use crate::html::html_to_text;
use crate::models::{VoteTally, VoteType};
use crate::state::{AnswerCard, DetailFocus, PageLoad, QuestionDetail, QuestionDetailPage};
use crate::widgets::InputFieldWidget;

use super::helpers::{scroll_to_show, tag_badges, wrap_text};
use super::home::render_centered;
use super::theme::{
    COLOR_ACCEPTED, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INFO, COLOR_SELECTED, COLOR_TEXT,
};

const ANSWER_EDITOR_HEIGHT: u16 = 7;
const COMMENT_EDITOR_HEIGHT: u16 = 3;

/// How an answer card is drawn for the current session.
#[derive(Debug, Clone, Copy)]
pub struct CardView {
    pub selected: bool,
    pub can_accept: bool,
    pub can_vote: bool,
    pub logged_in: bool,
}

/// `▲ 3  ▼ 1  net 2`, with the caller's own vote highlighted.
fn vote_spans(tally: &VoteTally) -> Vec<Span<'static>> {
    let style = |kind: VoteType| {
        if tally.user_vote == Some(kind) {
            Style::default().fg(COLOR_SELECTED).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        }
    };
    vec![
        Span::styled(format!("▲ {}", tally.upvotes), style(VoteType::Upvote)),
        Span::raw("  "),
        Span::styled(format!("▼ {}", tally.downvotes), style(VoteType::Downvote)),
        Span::styled(format!("  net {}", tally.net_votes), Style::default().fg(COLOR_DIM)),
    ]
}

/// Lines of one answer card, `width` columns wide including the bar.
pub fn answer_card_lines(card: &AnswerCard, view: CardView, width: usize) -> Vec<Line<'static>> {
    let answer = card.answer();
    let bar_color = if answer.is_accepted {
        COLOR_ACCEPTED
    } else if view.selected {
        COLOR_SELECTED
    } else {
        COLOR_BORDER
    };
    let bar = || Span::styled(if view.selected { "▌ " } else { "│ " }, Style::default().fg(bar_color));
    let text_width = width.saturating_sub(2).max(1);
    let text_style = Style::default().fg(COLOR_TEXT);
    let dim = Style::default().fg(COLOR_DIM);

    let mut lines = Vec::new();
    if answer.is_accepted {
        lines.push(Line::from(vec![
            bar(),
            Span::styled(
                "✓ Accepted Answer",
                Style::default()
                    .fg(COLOR_ACCEPTED)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    for text in wrap_text(&html_to_text(&answer.content), text_width) {
        lines.push(Line::from(vec![bar(), Span::styled(text, text_style)]));
    }
    lines.push(Line::from(vec![
        bar(),
        Span::styled(format!("answered {}", absolute_date(answer.created_at)), dim),
    ]));
    if let Some(tally) = card.votes() {
        let mut spans = vec![bar()];
        spans.extend(vote_spans(tally));
        lines.push(Line::from(spans));
    }

    let thread = &card.comments;
    let toggle = if thread.is_expanded() { "Hide" } else { "Show" };
    let mut controls = vec![
        bar(),
        Span::styled("[c]", Style::default().fg(COLOR_INFO)),
        Span::styled(format!(" {} Comments ({})", toggle, thread.len()), text_style),
    ];
    if view.can_accept {
        controls.push(Span::raw("   "));
        if card.is_accepting() {
            controls.push(Span::styled("Accepting...", dim));
        } else {
            controls.push(Span::styled("[x]", Style::default().fg(COLOR_INFO)));
            controls.push(Span::styled(
                " Accept Answer",
                Style::default().fg(COLOR_ACCEPTED),
            ));
        }
    }
    if view.can_vote {
        controls.push(Span::raw("   "));
        if card.is_voting() {
            controls.push(Span::styled("Voting...", dim));
        } else {
            controls.push(Span::styled("[u]", Style::default().fg(COLOR_INFO)));
            controls.push(Span::styled(" Upvote  ", text_style));
            controls.push(Span::styled("[d]", Style::default().fg(COLOR_INFO)));
            controls.push(Span::styled(" Downvote", text_style));
        }
    }
    lines.push(Line::from(controls));

    if thread.is_expanded() {
        if thread.is_loading() {
            lines.push(Line::from(vec![bar(), Span::styled("  Loading comments...", dim)]));
        } else if thread.is_empty() {
            lines.push(Line::from(vec![bar(), Span::styled("  No comments yet.", dim)]));
        }
        for comment in thread.comments() {
            let wrapped = wrap_text(&html_to_text(&comment.content), text_width.saturating_sub(4));
            for (i, text) in wrapped.into_iter().enumerate() {
                let prefix = if i == 0 { "  • " } else { "    " };
                lines.push(Line::from(vec![
                    bar(),
                    Span::styled(format!("{}{}", prefix, text), text_style),
                ]));
            }
        }
        if !thread.is_loading() {
            let hint = if !view.logged_in {
                Span::styled("  Log in to add a comment", dim)
            } else if thread.is_posting() {
                Span::styled("  Posting comment...", dim)
            } else {
                Span::styled("  [m] Add a comment", Style::default().fg(COLOR_INFO))
            };
            lines.push(Line::from(vec![bar(), hint]));
        }
    }

    lines.push(Line::default());
    lines
}

/// "1 Answer" / "N Answers"
pub fn answer_count_label(count: usize) -> String {
    if count == 1 {
        "1 Answer".to_string()
    } else {
        format!("{} Answers", count)
    }
}

/// Question header lines above the answers.
fn question_lines(detail: &QuestionDetail, width: usize) -> Vec<Line<'static>> {
    let question = &detail.question;
    let mut lines = vec![
        Line::styled(
            question.title.clone(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Asked {}", absolute_date(question.created_at)),
            Style::default().fg(COLOR_DIM),
        ),
        Line::default(),
    ];
    for text in wrap_text(&html_to_text(&question.description), width) {
        lines.push(Line::styled(text, Style::default().fg(COLOR_TEXT)));
    }

    let tags = question.tag_list();
    if !tags.is_empty() {
        lines.push(Line::default());
        lines.push(tag_badges(&tags));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        answer_count_label(detail.answer_count()),
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());
    lines
}

pub fn render_detail(frame: &mut Frame, area: Rect, page: &mut QuestionDetailPage) {
    match &page.load {
        PageLoad::Loading => {
            render_centered(
                frame,
                area,
                vec![Line::styled("Loading question...", Style::default().fg(COLOR_DIM))],
            );
            return;
        }
        PageLoad::Failed => {
            render_centered(
                frame,
                area,
                vec![
                    Line::styled("Failed to load question", Style::default().fg(COLOR_ERROR)),
                    Line::styled("Press r to retry", Style::default().fg(COLOR_DIM)),
                ],
            );
            return;
        }
        PageLoad::Ready(_) => {}
    }

    let logged_in = page.session.is_logged_in();
    let editor_height = match page.focus {
        DetailFocus::CommentEditor => COMMENT_EDITOR_HEIGHT,
        _ if logged_in => ANSWER_EDITOR_HEIGHT,
        _ => 1,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(editor_height)])
        .split(area);

    render_content(frame, chunks[0], page, logged_in);
    render_editor(frame, chunks[1], page, logged_in);
}

fn render_content(frame: &mut Frame, area: Rect, page: &mut QuestionDetailPage, logged_in: bool) {
    let Some(detail) = page.detail() else {
        return;
    };
    let width = area.width as usize;

    let mut lines = question_lines(detail, width);
    let mut selected_range = (0, 0);
    if detail.cards.is_empty() {
        lines.push(Line::styled(
            "No answers yet. Be the first to help!",
            Style::default().fg(COLOR_DIM),
        ));
    }
    for (i, card) in detail.cards.iter().enumerate() {
        let view = CardView {
            selected: i == page.selected,
            can_accept: page.can_accept(i),
            can_vote: page.can_vote(i),
            logged_in,
        };
        let card_lines = answer_card_lines(card, view, width);
        if view.selected {
            selected_range = (lines.len(), lines.len() + card_lines.len());
        }
        lines.extend(card_lines);
    }

    if page.follow_selection && !detail.cards.is_empty() {
        page.scroll = scroll_to_show(
            page.scroll,
            selected_range.0,
            selected_range.1,
            area.height as usize,
        );
    }
    let max_scroll = lines.len().saturating_sub(area.height as usize);
    page.scroll = page.scroll.min(max_scroll.min(u16::MAX as usize) as u16);

    frame.render_widget(Paragraph::new(lines).scroll((page.scroll, 0)), area);
}

fn render_editor(frame: &mut Frame, area: Rect, page: &mut QuestionDetailPage, logged_in: bool) {
    match page.focus {
        DetailFocus::CommentEditor => {
            let Some(card) = page.selected_card() else {
                return;
            };
            let title = if card.comments.is_posting() {
                " Posting comment... "
            } else {
                " Comment (Enter to post, Esc to cancel) "
            };
            frame.render_widget(
                InputFieldWidget::new(&card.comments.draft, title, true)
                    .placeholder("Add a comment..."),
                area,
            );
        }
        _ if logged_in => {
            let focused = page.focus == DetailFocus::AnswerEditor;
            let title = if page.is_submitting_answer() {
                " Submitting... "
            } else if focused {
                " Your Answer (Ctrl+S to submit, Esc to leave) "
            } else {
                " Your Answer "
            };
            frame.render_widget(
                InputFieldWidget::new(&page.answer_draft, title, focused)
                    .placeholder("Press w to write an answer"),
                area,
            );
        }
        _ => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "Please log in to post an answer.",
                    Style::default().fg(COLOR_DIM),
                )),
                area,
            );
        }
    }
}
