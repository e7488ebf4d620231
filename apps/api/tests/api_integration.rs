//! End-to-end API integration tests
//!
//! These tests drive the full HTTP router:
//! - Request validation before any upstream call
//! - Structured results decoded from well-formed completions
//! - Canned fallbacks for unusable completions
//! - Upstream failures surfaced as generic 500s

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use codeagent_api::agents::types::{ReviewResult, SearchResult, SuggestResult};
use codeagent_api::agents::StructuredResult;
use codeagent_api::api::{self, AppState};
use codeagent_api::domain::{CompletionClient, CompletionOptions, Corpus};
use codeagent_api::infrastructure::AnthropicClient;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

use common::{messages_body, spawn_upstream, FakeClient};

/// Setup test application around a completion client
fn setup_app(client: Arc<dyn CompletionClient>) -> Router {
    api::router(AppState::new(
        client,
        Arc::new(Corpus::builtin()),
        CompletionOptions::default(),
    ))
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

fn review_json() -> Value {
    json!({
        "summary": "An empty function named f.",
        "overall_quality": "Fair",
        "issues": [{
            "severity": "Low",
            "location": "f",
            "description": "Function body is empty",
            "recommendation": "Implement or remove f"
        }],
        "strengths": ["Valid syntax"],
        "best_practices": ["Use descriptive function names"]
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app(FakeClient::replying(""));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_review_returns_parsed_completion() {
    let client = FakeClient::replying(format!(
        "Here is my review:\n```json\n{}\n```",
        serde_json::to_string_pretty(&review_json()).unwrap()
    ));
    let app = setup_app(client.clone());

    let (status, json) = post_json(
        app,
        "/api/code-review/review",
        json!({ "code": "function f(){}", "language": "javascript" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["review"], review_json());
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_review_keeps_undeclared_completion_keys() {
    let mut reply = review_json();
    reply["confidence"] = json!(0.9);
    reply["issues"][0]["rule"] = json!("no-empty-function");
    let client = FakeClient::replying(format!("```json\n{}\n```", reply));
    let app = setup_app(client);

    let (status, json) = post_json(
        app,
        "/api/code-review/review",
        json!({ "code": "function f(){}", "language": "javascript" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["review"], reply);
}

#[tokio::test]
async fn test_review_prose_completion_returns_canned_review() {
    let client = FakeClient::replying("The function looks fine, nothing to report.");
    let app = setup_app(client);

    let (status, json) = post_json(
        app,
        "/api/code-review/review",
        json!({ "code": "function f(){}", "language": "javascript" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["review"], serde_json::to_value(ReviewResult::fallback()).unwrap());
}

#[tokio::test]
async fn test_review_missing_code_is_rejected_without_upstream_call() {
    let client = FakeClient::replying(review_json().to_string());
    let app = setup_app(client.clone());

    let (status, json) = post_json(
        app,
        "/api/code-review/review",
        json!({ "language": "javascript" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Code snippet is required" }));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_missing_language_is_rejected() {
    let client = FakeClient::replying(review_json().to_string());

    for uri in ["/api/code-review/review", "/api/code-review/suggest-improvements"] {
        let (status, json) = post_json(
            setup_app(client.clone()),
            uri,
            json!({ "code": "function f(){}", "language": "" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Programming language is required");
    }

    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_search_and_explain_require_their_fields() {
    let client = FakeClient::replying("{}");

    let (status, json) = post_json(
        setup_app(client.clone()),
        "/api/code-search/search",
        json!({ "context": { "app": "rental_app" } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Search query is required");

    let (status, json) = post_json(
        setup_app(client.clone()),
        "/api/code-search/explain",
        json!({ "language": "deluge" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Code snippet is required");

    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_malformed_body_keeps_error_shape() {
    let app = setup_app(FakeClient::replying("{}"));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/code-review/review")
                .header("content-type", "application/json")
                .body(Body::from("{\"code\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_search_with_truncated_completion_returns_canned_result() {
    let client = FakeClient::replying("```json\n{\"relevant_snippets\": [{\"filename\": \"rental\n```");
    let app = setup_app(client);

    let (status, json) = post_json(
        app,
        "/api/code-search/search",
        json!({ "query": "rental" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"], serde_json::to_value(SearchResult::fallback()).unwrap());
}

#[tokio::test]
async fn test_suggest_improvements_through_real_client() {
    let suggestions = json!({
        "summary": "Name the function",
        "improvements": [{
            "category": "Readability",
            "description": "Use a descriptive name",
            "original_code": "function f(){}",
            "improved_code": "function noop(){}",
            "impact": "Low"
        }],
        "refactored_code": "function noop(){}"
    });
    let upstream = spawn_upstream(StatusCode::OK, messages_body(&suggestions.to_string())).await;
    let client = AnthropicClient::new("sk-test").with_base_url(&upstream.base_url);
    let app = setup_app(Arc::new(client));

    let (status, json) = post_json(
        app,
        "/api/code-review/suggest-improvements",
        json!({
            "code": "function f(){}",
            "language": "javascript",
            "context": { "framework": "none" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["suggestions"], suggestions);

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    let prompt = requests[0].body["messages"][0]["content"][0]["text"]
        .as_str()
        .unwrap();
    assert!(prompt.contains("\"framework\": \"none\""));
}

#[tokio::test]
async fn test_upstream_failure_returns_generic_500() {
    let upstream = spawn_upstream(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"type":"error","error":{"type":"api_error","message":"Internal server error"}}"#,
    )
    .await;
    let client = AnthropicClient::new("sk-test").with_base_url(&upstream.base_url);
    let app = setup_app(Arc::new(client));

    let (status, json) = post_json(
        app,
        "/api/code-review/review",
        json!({ "code": "function f(){}", "language": "javascript" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to review code" }));
}

#[tokio::test]
async fn test_empty_provider_content_returns_canned_suggestions() {
    let upstream = spawn_upstream(
        StatusCode::OK,
        json!({ "content": [], "stop_reason": "max_tokens" }).to_string(),
    )
    .await;
    let client = AnthropicClient::new("sk-test").with_base_url(&upstream.base_url);
    let app = setup_app(Arc::new(client));

    let (status, json) = post_json(
        app,
        "/api/code-review/suggest-improvements",
        json!({ "code": "x = 1;", "language": "deluge" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["suggestions"],
        serde_json::to_value(SuggestResult::fallback()).unwrap()
    );
}
