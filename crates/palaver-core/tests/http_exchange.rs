//! Integration tests for the HTTP transport
//!
//! Each test starts a local axum server on an ephemeral port and points an
//! `HttpTransport` at it.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use palaver_core::error::{APPLICATION_APOLOGY, TRANSPORT_APOLOGY};
use palaver_core::{
    ChatRequest, HttpTransport, Origin, ReplyFailure, WidgetConfig, WidgetController, deliver,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the server saw for one request
#[derive(Debug, Clone)]
struct Captured {
    content_type: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    reply: &'static str,
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn chat_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.captured.lock().await.push(Captured { content_type, body });
    (state.status, state.reply)
}

/// Start a server answering every `/api/chat` POST with `status` and `reply`.
async fn spawn_server(
    status: StatusCode,
    reply: &'static str,
) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        status,
        reply,
        captured: captured.clone(),
    };
    let app = Router::new()
        .route("/api/chat", post(chat_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    (format!("http://{addr}"), captured)
}

/// Test the request shape seen by the server
#[tokio::test]
async fn test_request_body_and_headers() {
    let (base, captured) = spawn_server(StatusCode::OK, r#"{"success":true,"response":"Hi"}"#).await;
    let transport = HttpTransport::new(&WidgetConfig::new("demo-token-123", &base));

    let outcome = deliver(&transport, &ChatRequest::new("Hello there", "demo-token-123")).await;
    assert_eq!(outcome, Ok("Hi".to_string()));

    let seen = captured.lock().await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        seen[0].body,
        json!({"message": "Hello there", "token": "demo-token-123"})
    );
}

/// Test that a trailing slash on the base URL still reaches /api/chat
#[tokio::test]
async fn test_trailing_slash_base_url() {
    let (base, captured) = spawn_server(StatusCode::OK, r#"{"success":true,"response":"ok"}"#).await;
    let transport = HttpTransport::new(&WidgetConfig::new("t", format!("{base}/")));

    let outcome = deliver(&transport, &ChatRequest::new("q", "t")).await;
    assert_eq!(outcome, Ok("ok".to_string()));
    assert_eq!(captured.lock().await.len(), 1);
}

/// Test application failures: success false, missing flag, and error status with JSON body
#[tokio::test]
async fn test_application_failures() {
    let cases = [
        (StatusCode::OK, r#"{"success":false}"#),
        (StatusCode::OK, r#"{"response":"no flag"}"#),
        (StatusCode::INTERNAL_SERVER_ERROR, r#"{"success":false,"error":"boom"}"#),
        (StatusCode::OK, r#"{"success":true}"#),
    ];

    for (status, reply) in cases {
        let (base, _) = spawn_server(status, reply).await;
        let transport = HttpTransport::new(&WidgetConfig::new("t", &base));
        let outcome = deliver(&transport, &ChatRequest::new("q", "t")).await;
        assert_eq!(outcome, Err(ReplyFailure::Application), "reply {reply}");
    }
}

/// Test that a non-JSON body is a transport failure
#[tokio::test]
async fn test_non_json_body_is_transport_failure() {
    let (base, _) = spawn_server(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").await;
    let transport = HttpTransport::new(&WidgetConfig::new("t", &base));

    let outcome = deliver(&transport, &ChatRequest::new("q", "t")).await;
    assert!(matches!(outcome, Err(ReplyFailure::Transport { .. })));
}

/// Test that an unreachable service is a transport failure
#[tokio::test]
async fn test_unreachable_service() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    drop(listener);

    let transport = HttpTransport::new(&WidgetConfig::new("t", format!("http://{addr}")));
    let outcome = deliver(&transport, &ChatRequest::new("q", "t")).await;
    match outcome {
        Err(failure @ ReplyFailure::Transport { .. }) => {
            assert_eq!(failure.apology(), TRANSPORT_APOLOGY);
        }
        other => panic!("Expected transport failure, got {other:?}"),
    }
}

/// Test a full controller exchange over HTTP
#[tokio::test]
async fn test_controller_round_trip() {
    let (base, captured) =
        spawn_server(StatusCode::OK, r#"{"success":true,"response":"We open at *nine*."}"#).await;
    let config = WidgetConfig::new("demo-token-123", &base);
    let transport = HttpTransport::new(&config);
    let mut controller = WidgetController::new(config, transport);

    controller.open();
    controller.set_draft("When do you open?");
    let reply = controller.submit_draft().await.expect("reply");
    assert_eq!(reply.origin, Origin::Bot);
    assert_eq!(reply.content, "We open at *nine*.");

    let state = controller.state();
    assert_eq!(state.messages().len(), 3);
    assert!(!state.is_pending());
    assert_ne!(state.messages()[2].content, APPLICATION_APOLOGY);
    assert_eq!(captured.lock().await[0].body["message"], "When do you open?");
}
