//! Wire format of the chat endpoint
//!
//! `POST {base}/api/chat` with `{"message": ..., "token": ...}`; the service
//! answers `{"success": bool, "response"?: string}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReplyFailure;

/// Path appended to the configured base URL.
pub const CHAT_PATH: &str = "/api/chat";

/// Request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub token: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: token.into(),
        }
    }
}

/// Response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Absent is treated the same as `false`.
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ChatResponse {
    /// Interpret a decoded response body.
    ///
    /// Only `success: true` together with a string `response` yields a reply.
    /// Any other JSON value is an application failure.
    pub fn interpret(body: Value) -> Result<String, ReplyFailure> {
        // serde would accept a positional array for a struct
        if !body.is_object() {
            return Err(ReplyFailure::Application);
        }
        match serde_json::from_value::<ChatResponse>(body) {
            Ok(ChatResponse {
                success: true,
                response: Some(text),
            }) => Ok(text),
            Ok(_) | Err(_) => Err(ReplyFailure::Application),
        }
    }
}
