//! Common test utilities for integration tests.
//!
//! [`TestHarness`] wires an [`App`] to a recording [`MockHttpClient`] and
//! an [`InMemorySession`], and lets a test pump request results back into
//! the app one at a time.
//!
//! ```ignore
//! let mut h = TestHarness::logged_in(5);
//! h.http.set_method_response("GET", &h.url("/questions/"), questions_response());
//! h.app.navigate(Route::Home).await;
//! h.next().await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

use stackit::adapters::{InMemorySession, MockHttpClient};
use stackit::api::ForumClient;
use stackit::app::{App, AppMessage};
use stackit::session::Session;

pub const BASE_URL: &str = "http://forum.test";

/// An app under test plus handles on its collaborators.
pub struct TestHarness {
    pub app: App,
    pub rx: UnboundedReceiver<AppMessage>,
    pub http: MockHttpClient,
    pub store: InMemorySession,
}

impl TestHarness {
    pub fn new(session: Option<Session>) -> Self {
        let http = MockHttpClient::new();
        let store = InMemorySession::new();
        store.set_session(session);

        let client = ForumClient::new(BASE_URL, Arc::new(http.clone()));
        let mut app = App::new(client, Arc::new(store.clone()));
        let rx = app.message_rx.take().expect("fresh app owns its receiver");

        Self {
            app,
            rx,
            http,
            store,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub fn logged_in(user_id: i64) -> Self {
        Self::new(Some(Session::new("test-token", user_id)))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    /// Wait for the next request result without applying it.
    pub async fn recv(&mut self) -> AppMessage {
        tokio::time::timeout(Duration::from_secs(2), self.rx.recv())
            .await
            .expect("timed out waiting for a request to finish")
            .expect("message channel closed")
    }

    /// Wait for the next request result and apply it.
    pub async fn next(&mut self) {
        let msg = self.recv().await;
        self.app.handle_message(msg).await;
    }

    pub fn toasts(&self) -> Vec<String> {
        self.app
            .notifications
            .messages()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// A question as the detail endpoint returns it.
pub fn question_json(id: i64, owner_id: i64, answers: Vec<Value>) -> Value {
    json!({
        "id": id,
        "title": "How do I share state between tasks?",
        "description": "<p>Several tasks need the same map.</p>",
        "tags": "rust, tokio",
        "owner_id": owner_id,
        "created_at": "2024-03-01T12:00:00",
        "answers": answers
    })
}

pub fn answer_json(id: i64, accepted: bool) -> Value {
    json!({
        "id": id,
        "content": format!("<p>Answer {}</p>", id),
        "question_id": 42,
        "owner_id": 9,
        "is_accepted": accepted,
        "created_at": "2024-03-02T08:30:00",
        "comments": null
    })
}

pub fn comment_json(id: i64, answer_id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "content": content,
        "answer_id": answer_id,
        "owner_id": 5
    })
}

pub fn tally_json(upvotes: u32, downvotes: u32, user_vote: Option<&str>) -> Value {
    json!({
        "upvotes": upvotes,
        "downvotes": downvotes,
        "net_votes": i64::from(upvotes) - i64::from(downvotes),
        "user_vote": user_vote
    })
}

pub fn notification_json(id: i64, read: bool, question_id: Option<i64>) -> Value {
    json!({
        "id": id,
        "message": format!("Notification {}", id),
        "type": "answer",
        "is_read": read,
        "related_question_id": question_id,
        "related_answer_id": null,
        "created_at": "2024-03-02T08:30:00"
    })
}
