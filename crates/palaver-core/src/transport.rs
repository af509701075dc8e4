//! Transport abstraction for the chat request
//!
//! The [`ChatTransport`] trait performs the single network call of an
//! exchange and hands back the raw JSON body. [`deliver`] maps that result
//! onto a displayable [`ReplyOutcome`].
//!
//! ## Implementations
//!
//! - [`HttpTransport`]: reqwest `POST {base}/api/chat` (in this module)
//! - [`MockTransport`](crate::MockTransport): scripted in-memory transport for tests

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::WidgetConfig;
use crate::error::{ReplyFailure, TransportError};
use crate::wire::{ChatRequest, ChatResponse};

/// Final result of one exchange: reply text, or the failure to apologize for.
pub type ReplyOutcome = Result<String, ReplyFailure>;

/// Transport trait for the chat request
///
/// Implementations issue exactly one request per call and never retry.
/// Browser futures are not `Send`, so the bound is relaxed on `wasm32`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatTransport {
    /// Post one message and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or the body is not JSON.
    async fn post_chat(&self, request: &ChatRequest) -> Result<Value, TransportError>;
}

/// Run one exchange over `transport` and normalize the result.
#[instrument(skip_all, fields(message_len = request.message.len()))]
pub async fn deliver<T: ChatTransport + ?Sized>(transport: &T, request: &ChatRequest) -> ReplyOutcome {
    match transport.post_chat(request).await {
        Ok(body) => {
            let outcome = ChatResponse::interpret(body);
            if outcome.is_err() {
                debug!("Chat service answered without a usable reply");
            }
            outcome
        }
        Err(e) => {
            warn!(error = %e, "Chat request failed");
            Err(e.into())
        }
    }
}

/// HTTP transport posting JSON to `{base}/api/chat`
///
/// No timeout is configured; callers wanting one wrap [`deliver`] themselves.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the endpoint in `config`
    pub fn new(config: &WidgetConfig) -> Self {
        Self::with_client(Client::new(), config.chat_endpoint())
    }

    /// Create a transport with an existing client and a full endpoint URL
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatTransport for HttpTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<Value, TransportError> {
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        // The status code is not consulted; the body decides the outcome.
        debug!(status = %response.status(), endpoint = %self.endpoint, "Chat response received");

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
