//! Mock configuration helpers.

pub use stackit::adapters::mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use stackit::traits::{HttpError, Response};

use serde_json::Value;

/// Fluent setup of [`MockHttpClient`] routes.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new(client: &MockHttpClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    pub fn get(self, url: &str, status: u16, body: Value) -> Self {
        self.client
            .set_method_response("GET", url, MockResponse::json(status, body));
        self
    }

    pub fn post(self, url: &str, status: u16, body: Value) -> Self {
        self.client
            .set_method_response("POST", url, MockResponse::json(status, body));
        self
    }

    pub fn put(self, url: &str, status: u16, body: Value) -> Self {
        self.client
            .set_method_response("PUT", url, MockResponse::json(status, body));
        self
    }

    pub fn delete(self, url: &str, status: u16, body: Value) -> Self {
        self.client
            .set_method_response("DELETE", url, MockResponse::json(status, body));
        self
    }

    /// Make every unmatched request fail at the transport level.
    pub fn unreachable(self) -> Self {
        self.client.set_default_response(MockResponse::Error(
            HttpError::ConnectionFailed("connection refused".to_string()),
        ));
        self
    }
}
