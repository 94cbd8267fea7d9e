//! Mock Anthropic backend server for integration tests
//!
//! Implements a minimal Messages API that returns canned responses and
//! records what it received, so tests can assert on the exact wire shape
//! and on whether the transport was reached at all.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock Anthropic backend that returns predictable responses
pub struct MockAnthropic {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    message_count: AtomicU32,
    /// Number of requests to fail with 500 before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Body of the most recent request, for wire-shape assertions
    last_request: Mutex<Option<serde_json::Value>>,
}

impl MockAnthropic {
    /// Start the mock server, returning immediately
    pub async fn start() -> Self {
        Self::start_inner(0).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> Self {
        Self::start_inner(n).await
    }

    async fn start_inner(fail_count: u32) -> Self {
        let state = Arc::new(MockState {
            message_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/messages", routing::post(handle_messages))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock local addr");
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Self { addr, shutdown, state }
    }

    /// Base URL for configuring the mock as a provider endpoint
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of message requests received
    pub fn message_count(&self) -> u32 {
        self.state.message_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent request, if any
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockAnthropic {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_messages(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.message_count.fetch_add(1, Ordering::Relaxed);
    *state.last_request.lock().unwrap() = Some(body.clone());

    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.store(remaining - 1, Ordering::Relaxed);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "type": "error",
                "error": {"type": "api_error", "message": "injected failure"}
            })),
        )
            .into_response();
    }

    let model = body["model"].as_str().unwrap_or("mock-model").to_owned();

    if body["stream"] == serde_json::Value::Bool(true) {
        return sse_response(&model);
    }

    Json(serde_json::json!({
        "id": "msg_mock_01",
        "type": "message",
        "role": "assistant",
        "model": model,
        "content": [{"type": "text", "text": "Hello from mock Anthropic"}],
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 7, "output_tokens": 5}
    }))
    .into_response()
}

/// Canned SSE body with three text fragments, in Anthropic event framing
fn sse_response(model: &str) -> axum::response::Response {
    let events = [
        (
            "message_start",
            serde_json::json!({
                "type": "message_start",
                "message": {"id": "msg_mock_01", "type": "message", "role": "assistant", "model": model}
            }),
        ),
        (
            "content_block_start",
            serde_json::json!({
                "type": "content_block_start",
                "index": 0,
                "content_block": {"type": "text", "text": ""}
            }),
        ),
        (
            "content_block_delta",
            serde_json::json!({
                "type": "content_block_delta",
                "index": 0,
                "delta": {"type": "text_delta", "text": "Hello"}
            }),
        ),
        (
            "content_block_delta",
            serde_json::json!({
                "type": "content_block_delta",
                "index": 0,
                "delta": {"type": "text_delta", "text": " from"}
            }),
        ),
        (
            "content_block_delta",
            serde_json::json!({
                "type": "content_block_delta",
                "index": 0,
                "delta": {"type": "text_delta", "text": " mock"}
            }),
        ),
        (
            "content_block_stop",
            serde_json::json!({"type": "content_block_stop", "index": 0}),
        ),
        (
            "message_delta",
            serde_json::json!({
                "type": "message_delta",
                "delta": {"stop_reason": "end_turn", "stop_sequence": null},
                "usage": {"input_tokens": 7, "output_tokens": 3}
            }),
        ),
        ("message_stop", serde_json::json!({"type": "message_stop"})),
    ];

    let mut body = String::new();
    for (name, data) in events {
        body.push_str(&format!("event: {name}\ndata: {data}\n\n"));
    }

    ([(header::CONTENT_TYPE, "text/event-stream")], body).into_response()
}
