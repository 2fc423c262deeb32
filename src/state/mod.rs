//! Page controllers and their interaction state.
//!
//! - [`HomePage`], [`AskPage`], [`QuestionDetailPage`], [`LoginPage`],
//!   [`RegisterPage`], [`InboxPage`]: one per [`Route`]
//! - [`AnswerCard`] and [`CommentThread`]: per-answer state on the detail page
//! - [`NavBar`]: session indicator
//!
//! Controllers are plain state machines. They validate input and record
//! pending flags; the app shell issues the requests and feeds results back.

mod answer_card;
mod ask;
mod comment_thread;
mod detail;
mod home;
mod inbox;
mod login;
mod navbar;
mod page_load;
mod register;

pub use answer_card::AnswerCard;
pub use ask::{AskField, AskPage};
pub use comment_thread::CommentThread;
pub use detail::{DetailFocus, QuestionDetail, QuestionDetailPage};
pub use home::HomePage;
pub use inbox::InboxPage;
pub use login::{LoginField, LoginPage};
pub use navbar::{NavAction, NavBar, NavItem};
pub use page_load::PageLoad;
pub use register::{RegisterField, RegisterPage};

use crate::router::Route;
use crate::session::Session;
use crate::widgets::InputField;

/// The mounted page.
#[derive(Debug, Clone)]
pub enum Page {
    Home(HomePage),
    Ask(AskPage),
    Detail(QuestionDetailPage),
    Login(LoginPage),
    Register(RegisterPage),
    Inbox(InboxPage),
}

impl Page {
    /// Fresh controller for `route`.
    pub fn for_route(route: Route, session: &Session) -> Self {
        match route {
            Route::Home => Page::Home(HomePage::new()),
            Route::Ask => Page::Ask(AskPage::new()),
            Route::Login => Page::Login(LoginPage::new()),
            Route::Register => Page::Register(RegisterPage::new()),
            Route::Question(id) => Page::Detail(QuestionDetailPage::new(id, session.clone())),
            Route::Inbox => Page::Inbox(InboxPage::new(session)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Home(_) => Route::Home,
            Page::Ask(_) => Route::Ask,
            Page::Detail(page) => Route::Question(page.question_id),
            Page::Login(_) => Route::Login,
            Page::Register(_) => Route::Register,
            Page::Inbox(_) => Route::Inbox,
        }
    }

    /// Whether keystrokes currently go to a text field.
    pub fn is_editing(&self) -> bool {
        match self {
            Page::Ask(_) | Page::Login(_) | Page::Register(_) => true,
            Page::Detail(page) => page.focus != DetailFocus::Answers,
            Page::Home(_) | Page::Inbox(_) => false,
        }
    }

    /// The text field keystrokes go to, if any.
    pub fn focused_input_mut(&mut self) -> Option<&mut InputField> {
        match self {
            Page::Ask(page) => Some(page.focused_field_mut()),
            Page::Login(page) => Some(page.focused_field_mut()),
            Page::Register(page) => Some(page.focused_field_mut()),
            Page::Detail(page) => page.focused_input_mut(),
            Page::Home(_) | Page::Inbox(_) => None,
        }
    }
}
