//! ForumClient over the real reqwest transport against a wiremock backend.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stackit::adapters::ReqwestHttpClient;
use stackit::api::ForumClient;
use stackit::error::{ErrorCategory, StackitError};
use stackit::models::{
    LoginRequest, NewAnswer, NewComment, NewQuestion, VoteRequest, VoteType,
};

fn client_for(server: &MockServer) -> ForumClient {
    ForumClient::new(&server.uri(), Arc::new(ReqwestHttpClient::new()))
}

fn question_body(id: i64, tags: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Borrowing across await",
        "description": "<p>Why does this not compile?</p>",
        "tags": tags,
        "owner_id": 3,
        "created_at": "2024-03-01T12:00:00"
    })
}

#[tokio::test]
async fn test_list_questions_sends_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([question_body(1, "rust, async")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let questions = client_for(&server).list_questions().await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].tag_list(), vec!["rust", "async"]);
}

#[tokio::test]
async fn test_created_question_is_listed_with_its_tags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/questions/"))
        .and(header("Content-Type", "application/json"))
        .and(header("Authorization", "Bearer abc"))
        .and(body_json(json!({
            "title": "Borrowing across await",
            "tags": "go, rust",
            "description": "<p>Why does this not compile?</p>"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_body(11, "go, rust")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/questions/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([question_body(11, "go, rust")])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).with_auth("abc");
    let created = client
        .create_question(&NewQuestion {
            title: "Borrowing across await".to_string(),
            tags: "go, rust".to_string(),
            description: "<p>Why does this not compile?</p>".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 11);

    let listed = client.list_questions().await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![11]);
    assert_eq!(listed[0].tag_list(), vec!["go", "rust"]);
}

#[tokio::test]
async fn test_question_detail_carries_nested_answers() {
    let server = MockServer::start().await;
    let mut body = question_body(42, "");
    body["answers"] = json!([{
        "id": 1,
        "content": "<p>Use Arc</p>",
        "question_id": 42,
        "owner_id": 9,
        "is_accepted": false,
        "created_at": "2024-03-02T08:30:00",
        "comments": [{"id": 5, "content": "Agreed", "answer_id": 1}]
    }]);
    Mock::given(method("GET"))
        .and(path("/questions/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let question = client_for(&server).get_question(42).await.unwrap();

    assert!(question.tag_list().is_empty());
    assert_eq!(question.answers.len(), 1);
    assert_eq!(question.answers[0].comments.len(), 1);
}

#[tokio::test]
async fn test_answer_and_comment_posts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/answers/question/42"))
        .and(body_json(json!({"content": "<p>Use Arc</p>"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "content": "<p>Use Arc</p>",
            "question_id": 42,
            "owner_id": 3,
            "is_accepted": false,
            "created_at": "2024-03-02T08:30:00"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/comments/answer/2"))
        .and(body_json(json!({"content": "Thanks"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8, "content": "Thanks", "answer_id": 2, "owner_id": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_auth("abc");
    let answer = client
        .create_answer(
            42,
            &NewAnswer {
                content: "<p>Use Arc</p>".to_string(),
            },
        )
        .await
        .unwrap();
    let comment = client
        .create_comment(
            answer.id,
            &NewComment {
                content: "Thanks".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(comment.answer_id, Some(2));
}

#[tokio::test]
async fn test_accept_posts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/answers/7/accept"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "content": "<p>a</p>",
            "is_accepted": true,
            "created_at": "2024-03-02T08:30:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let answer = client_for(&server).with_auth("abc").accept_answer(7).await.unwrap();

    assert!(answer.is_accepted);
}

#[tokio::test]
async fn test_forbidden_maps_to_permission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/answers/7/accept"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"detail": "Not the question owner"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).accept_answer(7).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Permission);
}

#[tokio::test]
async fn test_server_error_is_retryable_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).list_questions().await.unwrap_err();

    assert!(matches!(err, StackitError::Network(_)));
    assert_eq!(err.category(), ErrorCategory::Request);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_is_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_question(1).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Request);
}

#[tokio::test]
async fn test_login_then_me_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1", "token_type": "bearer"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "username": "ada", "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    let me = client.with_auth(&token.access_token).me().await.unwrap();

    assert_eq!(me.id, 5);
}

#[tokio::test]
async fn test_vote_then_read_tally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/votes/"))
        .and(header("Authorization", "Bearer abc"))
        .and(body_json(json!({"answer_id": 7, "vote_type": "downvote"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Vote created", "vote_type": "downvote"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/votes/answer/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "upvotes": 0,
            "downvotes": 1,
            "net_votes": -1,
            "user_vote": "downvote"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).with_auth("abc");
    let outcome = client
        .cast_vote(&VoteRequest {
            answer_id: 7,
            vote_type: VoteType::Downvote,
        })
        .await
        .unwrap();
    let tally = client.answer_votes(7).await.unwrap();

    assert_eq!(outcome.vote_type, Some(VoteType::Downvote));
    assert_eq!(tally.net_votes, -1);
    assert_eq!(tally.user_vote, Some(VoteType::Downvote));
}

#[tokio::test]
async fn test_own_answer_vote_is_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/votes/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Cannot vote on your own answer"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .with_auth("abc")
        .cast_vote(&VoteRequest {
            answer_id: 7,
            vote_type: VoteType::Upvote,
        })
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Request);
    assert_eq!(err.user_message(), "Cannot vote on your own answer");
}

#[tokio::test]
async fn test_notification_routes_over_put_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notifications/unread-count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unread_count": 2})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/notifications/3/read"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Notification marked as read"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/notifications/mark-all-read"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "All notifications marked as read"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/notifications/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Notification deleted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_auth("abc");
    assert_eq!(client.unread_count().await.unwrap().unread_count, 2);
    client.mark_notification_read(3).await.unwrap();
    client.mark_all_notifications_read().await.unwrap();
    let deleted = client.delete_notification(3).await.unwrap();

    assert_eq!(deleted.message, "Notification deleted");
}

#[tokio::test]
async fn test_missing_notification_is_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notifications/9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Notification not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .with_auth("abc")
        .delete_notification(9)
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Request);
}

#[tokio::test]
async fn test_unreachable_backend_is_request_failure() {
    // Nothing listens on the discard port
    let client = ForumClient::new("http://127.0.0.1:9", Arc::new(ReqwestHttpClient::new()));

    let err = client.list_questions().await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Request);
}
