//! Application state and logic for the TUI.
//!
//! - [`App`]: the shell owning the mounted page, session and toasts
//! - [`AppMessage`]: results of spawned requests
//!
//! The shell never awaits the network on the event loop. Each request is a
//! spawned task that reports back through `message_tx`; the loop applies the
//! result in [`App::handle_message`] if the issuing page is still mounted.

mod actions;
mod handlers;
mod keys;
mod messages;
mod navigation;

pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::adapters::{FileSessionStore, ReqwestHttpClient};
use crate::api::ForumClient;
use crate::config::ClientConfig;
use crate::notifications::Notifications;
use crate::router::Route;
use crate::session::Session;
use crate::state::{NavBar, Page};
use crate::traits::SessionStore;

/// Main application state
pub struct App {
    /// The mounted page controller
    pub page: Page,
    /// Session as of the last navigation
    pub session: Session,
    /// Session indicator
    pub navbar: NavBar,
    /// Visible toasts
    pub notifications: Notifications,
    /// REST client; its bearer token follows `session`
    pub client: ForumClient,
    pub session_store: Arc<dyn SessionStore>,
    /// Sender handed to spawned requests
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Bumped on every mount; results tagged with an older value are stale
    pub generation: u64,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
}

impl App {
    /// App talking to `client` with sessions kept in `session_store`.
    ///
    /// Nothing is mounted until [`App::navigate`] is called.
    pub fn new(client: ForumClient, session_store: Arc<dyn SessionStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            page: Page::for_route(Route::Home, &Session::anonymous()),
            session: Session::anonymous(),
            navbar: NavBar::default(),
            notifications: Notifications::new(),
            client,
            session_store,
            message_tx,
            message_rx: Some(message_rx),
            generation: 0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// App wired to the real backend and the session file under the
    /// configured home directory.
    pub fn from_config(config: &ClientConfig) -> Self {
        let client = ForumClient::new(&config.api_url, Arc::new(ReqwestHttpClient::new()));
        let store = Arc::new(FileSessionStore::in_dir(config.home_dir()));
        Self::new(client, store)
    }

    /// The route of the mounted page.
    pub fn route(&self) -> Route {
        self.page.route()
    }

    /// Mark that a redraw is needed.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Periodic housekeeping: prune expired toasts.
    pub fn tick(&mut self, now: Instant) {
        if self.notifications.expire(now) {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }
}
