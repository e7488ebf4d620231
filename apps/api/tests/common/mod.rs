//! Shared test doubles: a scripted completion client and an in-process fake
//! of the Anthropic Messages API

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use codeagent_api::agents::AgentResult;
use codeagent_api::domain::{Completion, CompletionClient, CompletionOptions, PromptPair};
use serde_json::{json, Value};

/// Completion client returning one scripted text and counting calls
pub struct FakeClient {
    text: Option<String>,
    calls: AtomicUsize,
}

impl FakeClient {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            text: Some(text.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for FakeClient {
    async fn complete(
        &self,
        _prompt: &PromptPair,
        _options: &CompletionOptions,
    ) -> AgentResult<Completion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Completion {
            text: self.text.clone(),
            status: 200,
            ..Default::default()
        })
    }
}

/// A request received by the fake upstream
#[derive(Debug, Clone)]
pub struct Captured {
    pub headers: HeaderMap,
    pub body: Value,
}

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// Running fake of the Messages API
pub struct FakeUpstream {
    pub base_url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl FakeUpstream {
    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn messages(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    upstream
        .captured
        .lock()
        .unwrap()
        .push(Captured { headers, body });

    (
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body.clone(),
    )
}

/// Starts a fake upstream on an ephemeral port answering every
/// `POST /v1/messages` with `status` and `body`
pub async fn spawn_upstream(status: StatusCode, body: impl Into<String>) -> FakeUpstream {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/v1/messages", post(messages))
        .with_state(Upstream {
            status,
            body: body.into(),
            captured: captured.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        base_url: format!("http://{}", addr),
        captured,
    }
}

/// A Messages API success body whose first text block is `text`
pub fn messages_body(text: &str) -> String {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-haiku-20241022",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn"
    })
    .to_string()
}
