//! Navigation methods for the App.

use crate::error::StackitError;
use crate::router::Route;
use crate::session::Session;
use crate::state::Page;

use super::App;

impl App {
    /// Re-read the session from storage and mount `route`.
    pub async fn navigate(&mut self, route: Route) {
        self.refresh_session().await;
        self.mount(route);
    }

    /// Mount a fresh controller for the current route and re-read the
    /// unread badge.
    pub async fn reload(&mut self) {
        let route = self.route();
        self.navigate(route).await;
        self.refresh_unread();
    }

    /// Replace the mounted page and issue its initial read, if it has one.
    ///
    /// Bumping the generation detaches every in-flight request of the
    /// previous page.
    pub fn mount(&mut self, route: Route) {
        self.generation += 1;
        tracing::info!(route = %route, generation = self.generation, "mounting page");
        self.page = Page::for_route(route, &self.session);

        match route {
            Route::Home => self.spawn_list_questions(),
            Route::Question(id) => self.spawn_get_question(id),
            Route::Inbox if self.session.is_logged_in() => self.spawn_list_notifications(),
            Route::Inbox | Route::Ask | Route::Login | Route::Register => {}
        }
        self.mark_dirty();
    }

    /// Open the highlighted question on the home page.
    pub async fn open_selected_question(&mut self) {
        if let Page::Home(page) = &self.page {
            if let Some(id) = page.selected_question_id() {
                self.navigate(Route::Question(id)).await;
            }
        }
    }

    /// Forget the session and go home.
    ///
    /// The in-memory session is cleared even if the stored one cannot be
    /// deleted.
    pub async fn logout(&mut self) {
        if let Err(err) = self.session_store.clear().await {
            self.notifications
                .report(&StackitError::from(err), "Could not clear the session");
        }
        tracing::info!("logged out");
        self.apply_session(Session::anonymous());
        self.navbar.logout();
        self.notifications.info("Logged out");
        self.mount(Route::Home);
    }

    async fn refresh_session(&mut self) {
        let session = match self.session_store.load().await {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                self.notifications
                    .report(&StackitError::from(err), "Could not read the session");
                Session::anonymous()
            }
        };
        self.apply_session(session);
    }

    pub(super) fn apply_session(&mut self, session: Session) {
        self.client.set_auth_token(session.token.clone());
        self.navbar.refresh(&session);
        self.session = session;
    }
}
