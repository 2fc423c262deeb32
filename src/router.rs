//! Client routes.
//!
//! The client paths `/`, `/ask`, `/login`, `/register`, `/inbox` and
//! `/questions/:id` map onto [`Route`] variants; each variant mounts one
//! page controller.

use std::fmt;
use std::str::FromStr;

/// A client-visible location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Ask,
    Login,
    Register,
    Inbox,
    Question(i64),
}

impl Route {
    /// Parse a client path. Trailing slashes and a query string are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["ask"] => Some(Route::Ask),
            ["login"] => Some(Route::Login),
            ["register"] => Some(Route::Register),
            ["inbox"] => Some(Route::Inbox),
            ["questions", id] => id.parse().ok().map(Route::Question),
            _ => None,
        }
    }

    /// The client path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Ask => "/ask".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Inbox => "/inbox".to_string(),
            Route::Question(id) => format!("/questions/{}", id),
        }
    }

    /// Short label for the title bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Recent Questions",
            Route::Ask => "Ask a Question",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Inbox => "Notifications",
            Route::Question(_) => "Question",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| format!("unknown route: {}", s))
    }
}
