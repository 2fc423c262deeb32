//! Keyboard and paste input.
//!
//! Outside text fields single keys act: the navbar shortcuts, `q` quit,
//! `r` reload, and per-page keys. Inside a text field keys edit, `Tab`
//! moves between fields, `Ctrl+S` submits and `Esc` leaves.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::VoteType;
use crate::router::Route;
use crate::state::{AskField, DetailFocus, LoginField, NavAction, Page, RegisterField};
use crate::widgets::InputField;

use super::App;

/// Lines moved by PageUp/PageDown on the detail page.
const SCROLL_STEP: i32 = 10;

impl App {
    /// Handle a key press.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.page.is_editing() {
            self.handle_editing_key(key).await;
        } else {
            self.handle_browse_key(key).await;
        }
    }

    /// Insert pasted text into the focused field.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(field) = self.page.focused_input_mut() {
            field.insert_str(text);
            self.mark_dirty();
        }
    }

    async fn handle_browse_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char(c) = key.code {
            if let Some(action) = self.navbar.action_for_key(c) {
                match action {
                    NavAction::Go(route) => self.navigate(route).await,
                    NavAction::Logout => self.logout().await,
                }
                return;
            }
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            KeyCode::Char('r') => {
                self.reload().await;
                return;
            }
            KeyCode::Esc => {
                if self.route() != Route::Home {
                    self.navigate(Route::Home).await;
                }
                return;
            }
            _ => {}
        }

        match &mut self.page {
            Page::Home(page) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => page.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => page.select_next(),
                KeyCode::Enter => self.open_selected_question().await,
                _ => {}
            },
            Page::Detail(page) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => page.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => page.select_next(),
                KeyCode::PageUp => page.scroll_by(-SCROLL_STEP),
                KeyCode::PageDown => page.scroll_by(SCROLL_STEP),
                KeyCode::Enter | KeyCode::Char('c') => self.toggle_comments(),
                KeyCode::Char('x') => self.accept_selected(),
                KeyCode::Char('w') => self.start_answer(),
                KeyCode::Char('m') => self.start_comment(),
                KeyCode::Char('u') => self.vote_selected(VoteType::Upvote),
                KeyCode::Char('d') => self.vote_selected(VoteType::Downvote),
                _ => {}
            },
            Page::Inbox(page) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => page.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => page.select_next(),
                KeyCode::Enter => self.open_selected_notification().await,
                KeyCode::Char('m') => self.mark_selected_read(),
                KeyCode::Char('M') => self.mark_all_read(),
                KeyCode::Char('x') => self.delete_selected_notification(),
                _ => {}
            },
            Page::Ask(_) | Page::Login(_) | Page::Register(_) => {}
        }
    }

    async fn handle_editing_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                if let Page::Detail(page) = &mut self.page {
                    page.focus = DetailFocus::Answers;
                } else {
                    self.navigate(Route::Home).await;
                }
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.submit_focused();
                return;
            }
            KeyCode::Tab => {
                self.cycle_field(true);
                return;
            }
            KeyCode::BackTab => {
                self.cycle_field(false);
                return;
            }
            KeyCode::Enter => {
                if self.handle_enter() {
                    return;
                }
            }
            _ => {}
        }

        if ctrl {
            return;
        }
        if let Some(field) = self.page.focused_input_mut() {
            apply_edit_key(field, key.code);
        }
    }

    /// Enter on a form: next field, or submit on the last one.
    ///
    /// Returns false when Enter should be typed as a newline instead.
    fn handle_enter(&mut self) -> bool {
        match &mut self.page {
            Page::Ask(page) => match page.focus {
                AskField::Description => false,
                _ => {
                    page.focus = page.focus.next();
                    true
                }
            },
            Page::Login(page) => match page.focus {
                LoginField::Email => {
                    page.focus = page.focus.next();
                    true
                }
                LoginField::Password => {
                    self.submit_login();
                    true
                }
            },
            Page::Register(page) => match page.focus {
                RegisterField::Password => {
                    self.submit_register();
                    true
                }
                _ => {
                    page.focus = page.focus.next();
                    true
                }
            },
            Page::Detail(page) => match page.focus {
                DetailFocus::CommentEditor => {
                    self.submit_comment();
                    true
                }
                _ => false,
            },
            Page::Home(_) | Page::Inbox(_) => true,
        }
    }

    fn cycle_field(&mut self, forward: bool) {
        match &mut self.page {
            Page::Ask(page) => {
                page.focus = if forward {
                    page.focus.next()
                } else {
                    page.focus.prev()
                };
            }
            // Two or three fields: cycling forward covers both directions
            Page::Login(page) => page.focus = page.focus.next(),
            Page::Register(page) => {
                page.focus = page.focus.next();
                if !forward {
                    page.focus = page.focus.next();
                }
            }
            Page::Detail(_) | Page::Home(_) | Page::Inbox(_) => {}
        }
    }
}

/// Apply an editing key to `field`.
fn apply_edit_key(field: &mut InputField, code: KeyCode) {
    match code {
        KeyCode::Char(c) => field.insert_char(c),
        KeyCode::Enter => field.insert_char('\n'),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete_char(),
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.move_cursor_home(),
        KeyCode::End => field.move_cursor_end(),
        _ => {}
    }
}
