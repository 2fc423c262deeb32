//! Navigation bar and session indicator.

use crate::router::Route;
use crate::session::Session;

/// What activating a navbar item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Go(Route),
    Logout,
}

/// One navbar entry with its shortcut key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub key: char,
    pub action: NavAction,
}

const HOME: NavItem = NavItem {
    label: "Home",
    key: 'h',
    action: NavAction::Go(Route::Home),
};

/// Logged-in state as of the last mount.
///
/// Derived once from the session and only changed by an explicit logout;
/// storage edits made elsewhere are not noticed until the next navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavBar {
    logged_in: bool,
    /// Unread notification count, unknown until read.
    unread: Option<u32>,
}

impl NavBar {
    pub fn from_session(session: &Session) -> Self {
        Self {
            logged_in: session.is_logged_in(),
            unread: None,
        }
    }

    /// Re-derive from `session`, keeping the unread badge while still
    /// logged in.
    pub fn refresh(&mut self, session: &Session) {
        let unread = self.unread;
        *self = Self::from_session(session);
        if self.logged_in {
            self.unread = unread;
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.unread = None;
    }

    pub fn unread(&self) -> Option<u32> {
        self.unread
    }

    pub fn set_unread(&mut self, count: u32) {
        if self.logged_in {
            self.unread = Some(count);
        }
    }

    /// One notification was read elsewhere.
    pub fn read_one(&mut self) {
        if let Some(count) = self.unread.as_mut() {
            *count = count.saturating_sub(1);
        }
    }

    pub fn items(&self) -> Vec<NavItem> {
        if self.logged_in {
            vec![
                HOME,
                NavItem {
                    label: "Ask Question",
                    key: 'a',
                    action: NavAction::Go(Route::Ask),
                },
                NavItem {
                    label: "Inbox",
                    key: 'i',
                    action: NavAction::Go(Route::Inbox),
                },
                NavItem {
                    label: "Logout",
                    key: 'o',
                    action: NavAction::Logout,
                },
            ]
        } else {
            vec![
                HOME,
                NavItem {
                    label: "Login",
                    key: 'l',
                    action: NavAction::Go(Route::Login),
                },
                NavItem {
                    label: "Register",
                    key: 'g',
                    action: NavAction::Go(Route::Register),
                },
            ]
        }
    }

    /// The item bound to `key`, if visible.
    pub fn action_for_key(&self, key: char) -> Option<NavAction> {
        self.items()
            .into_iter()
            .find(|item| item.key == key)
            .map(|item| item.action)
    }
}
