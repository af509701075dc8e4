//! Mock transport implementation for testing
//!
//! Provides a scripted in-memory transport so controller and UI logic can be
//! exercised without a chat service.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use palaver_core::{MockTransport, WidgetConfig, WidgetController};
//! use serde_json::json;
//!
//! let transport = MockTransport::new();
//! transport.push_body(json!({"success": true, "response": "Hi"}));
//!
//! let mut controller = WidgetController::new(config, transport.clone());
//! controller.set_draft("hello");
//! controller.submit_draft().await;
//!
//! assert_eq!(transport.requests()[0].message, "hello");
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::error::TransportError;
use crate::transport::ChatTransport;
use crate::wire::ChatRequest;

/// A mock transport for testing
///
/// Each call pops the next scripted result. Clones share the script and the
/// request log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    /// Results handed out in order
    script: Arc<Mutex<VecDeque<Result<Value, TransportError>>>>,
    /// Every request received, in order
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockTransport {
    /// Create a mock with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body
    pub fn push_body(&self, body: Value) {
        self.script.lock().push_back(Ok(body));
    }

    /// Queue a transport error
    pub fn push_error(&self, error: TransportError) {
        self.script.lock().push_back(Err(error));
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatTransport for MockTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<Value, TransportError> {
        self.requests.lock().push(request.clone());
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted response".into())))
    }
}
