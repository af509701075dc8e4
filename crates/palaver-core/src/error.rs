//! Error types for the Palaver widget

use thiserror::Error;

use crate::message::MessageId;

/// Apology shown when the chat service answers but reports failure.
pub const APPLICATION_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Apology shown when the chat service could not be reached at all.
pub const TRANSPORT_APOLOGY: &str =
    "Sorry, I could not connect to the chat service. Please try again later.";

/// Errors raised while performing the network call itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body was not valid JSON
    #[error("Response body is not valid JSON: {0}")]
    Decode(String),
}

/// Why a reply could not be produced.
///
/// Both variants are recoverable: they surface as a bot message carrying
/// [`ReplyFailure::apology`] and the widget stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyFailure {
    /// The service was reached but answered with `success: false` or an
    /// unexpected payload.
    #[error("Chat service reported a failure")]
    Application,

    /// The request could not be completed.
    #[error("Chat service unreachable: {reason}")]
    Transport { reason: String },
}

impl ReplyFailure {
    /// Fixed human-readable reply shown in place of the bot's answer.
    pub fn apology(&self) -> &'static str {
        match self {
            ReplyFailure::Application => APPLICATION_APOLOGY,
            ReplyFailure::Transport { .. } => TRANSPORT_APOLOGY,
        }
    }
}

impl From<TransportError> for ReplyFailure {
    fn from(e: TransportError) -> Self {
        ReplyFailure::Transport {
            reason: e.to_string(),
        }
    }
}

/// Rejection of a reply that does not belong to the exchange in flight
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("No exchange is in flight")]
    NoPendingExchange,

    #[error("Reply belongs to message {actual}, but message {expected} is in flight")]
    Mismatch {
        expected: MessageId,
        actual: MessageId,
    },
}
