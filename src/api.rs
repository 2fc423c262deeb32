//! Forum API client.
//!
//! [`ForumClient`] knows the backend's paths and payloads. It attaches the
//! bearer token when one is set, turns non-2xx statuses into
//! [`NetworkError::HttpStatus`] and decodes JSON bodies. Transport goes
//! through the injected [`HttpClient`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{NetworkError, StackitResult};
use crate::models::{
    Answer, Comment, LoginRequest, NewAnswer, NewComment, NewQuestion, Notification, Question,
    RegisterRequest, StatusMessage, TokenResponse, UnreadCount, User, VoteOutcome, VoteRequest,
    VoteTally,
};
use crate::traits::{Headers, HttpClient, Response};

/// Client for the StackIt REST backend.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ForumClient {
    /// Base URL without a trailing slash
    base_url: String,
    http: Arc<dyn HttpClient>,
    /// Optional authentication token for Bearer auth
    auth_token: Option<String>,
}

impl std::fmt::Debug for ForumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForumClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.auth_token.is_some())
            .finish()
    }
}

impl ForumClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            auth_token: None,
        }
    }

    /// Set the authentication token for Bearer auth.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    /// Set or clear the authentication token on an existing client.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token.filter(|t| !t.is_empty());
    }

    /// Get the current authentication token, if set.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn headers(&self, with_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if with_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(ref token) = self.auth_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    fn decode<T: DeserializeOwned>(url: &str, response: Response) -> StackitResult<T> {
        if !response.is_success() {
            let err = NetworkError::from_status(response.status, &response.text());
            tracing::warn!("{} -> {}", url, err);
            return Err(err.into());
        }
        response.json::<T>().map_err(|e| {
            tracing::warn!("Failed to decode response from {}: {}", url, e);
            e.into()
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> StackitResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(&url, &self.headers(false))
            .await
            .map_err(|e| NetworkError::from_transport(e, &url))?;
        Self::decode(&url, response)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> StackitResult<T> {
        let url = self.url(path);
        let payload = match body {
            Some(body) => serde_json::to_string(body)?,
            None => String::new(),
        };
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(&url, &payload, &self.headers(true))
            .await
            .map_err(|e| NetworkError::from_transport(e, &url))?;
        Self::decode(&url, response)
    }

    async fn put_json<T: DeserializeOwned>(&self, path: &str) -> StackitResult<T> {
        let url = self.url(path);
        tracing::debug!("PUT {}", url);
        let response = self
            .http
            .put(&url, "", &self.headers(false))
            .await
            .map_err(|e| NetworkError::from_transport(e, &url))?;
        Self::decode(&url, response)
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> StackitResult<T> {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);
        let response = self
            .http
            .delete(&url, &self.headers(false))
            .await
            .map_err(|e| NetworkError::from_transport(e, &url))?;
        Self::decode(&url, response)
    }

    /// GET /questions/
    pub async fn list_questions(&self) -> StackitResult<Vec<Question>> {
        self.get_json("/questions/").await
    }

    /// GET /questions/{id}, with nested answers and comments.
    pub async fn get_question(&self, id: i64) -> StackitResult<Question> {
        self.get_json(&format!("/questions/{}", id)).await
    }

    /// POST /questions/
    pub async fn create_question(&self, question: &NewQuestion) -> StackitResult<Question> {
        self.post_json("/questions/", Some(question)).await
    }

    /// POST /answers/question/{id}
    pub async fn create_answer(&self, question_id: i64, answer: &NewAnswer) -> StackitResult<Answer> {
        self.post_json(&format!("/answers/question/{}", question_id), Some(answer))
            .await
    }

    /// POST /answers/{id}/accept
    ///
    /// Returns the updated answer; the backend clears the flag on siblings.
    pub async fn accept_answer(&self, answer_id: i64) -> StackitResult<Answer> {
        self.post_json::<(), _>(&format!("/answers/{}/accept", answer_id), None)
            .await
    }

    /// GET /comments/answer/{id}
    pub async fn list_comments(&self, answer_id: i64) -> StackitResult<Vec<Comment>> {
        self.get_json(&format!("/comments/answer/{}", answer_id))
            .await
    }

    /// POST /comments/answer/{id}
    pub async fn create_comment(
        &self,
        answer_id: i64,
        comment: &NewComment,
    ) -> StackitResult<Comment> {
        self.post_json(&format!("/comments/answer/{}", answer_id), Some(comment))
            .await
    }

    /// POST /votes/
    ///
    /// Casting the caller's current vote again removes it.
    pub async fn cast_vote(&self, vote: &VoteRequest) -> StackitResult<VoteOutcome> {
        self.post_json("/votes/", Some(vote)).await
    }

    /// GET /votes/answer/{id}; needs a token.
    pub async fn answer_votes(&self, answer_id: i64) -> StackitResult<VoteTally> {
        self.get_json(&format!("/votes/answer/{}", answer_id)).await
    }

    /// GET /notifications/, newest first.
    pub async fn list_notifications(&self) -> StackitResult<Vec<Notification>> {
        self.get_json("/notifications/").await
    }

    /// GET /notifications/unread-count
    pub async fn unread_count(&self) -> StackitResult<UnreadCount> {
        self.get_json("/notifications/unread-count").await
    }

    /// PUT /notifications/{id}/read
    pub async fn mark_notification_read(&self, id: i64) -> StackitResult<StatusMessage> {
        self.put_json(&format!("/notifications/{}/read", id)).await
    }

    /// PUT /notifications/mark-all-read
    pub async fn mark_all_notifications_read(&self) -> StackitResult<StatusMessage> {
        self.put_json("/notifications/mark-all-read").await
    }

    /// DELETE /notifications/{id}
    pub async fn delete_notification(&self, id: i64) -> StackitResult<StatusMessage> {
        self.delete_json(&format!("/notifications/{}", id)).await
    }

    /// POST /auth/login
    pub async fn login(&self, request: &LoginRequest) -> StackitResult<TokenResponse> {
        self.post_json("/auth/login", Some(request)).await
    }

    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> StackitResult<User> {
        self.post_json("/auth/register", Some(request)).await
    }

    /// GET /auth/me, using whatever token this client carries.
    pub async fn me(&self) -> StackitResult<User> {
        self.get_json("/auth/me").await
    }
}
