//! Conversation state owned by one widget instance
//!
//! Holds panel visibility, the append-only message history, the draft, and
//! the exchange in flight. All mutation goes through methods that keep the
//! single-request invariant: a new exchange can only begin from `Idle`, and a
//! reply is only accepted for the exchange that is in flight.

use crate::error::ExchangeError;
use crate::message::{Message, MessageId};
use crate::transport::ReplyOutcome;
use crate::wire::ChatRequest;

/// Exchange lifecycle. `Resolved`/`Failed` are momentary and fold back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    /// Waiting for the reply to the given user message
    Sending(MessageId),
}

/// Token for an exchange that has started but not completed.
///
/// Returned by [`ConversationState::submit`]; hand it back to
/// [`ConversationState::resolve`] together with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    /// The user message that started the exchange
    pub message_id: MessageId,
    /// Body to post
    pub request: ChatRequest,
}

/// In-memory state of one widget session
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationState {
    is_panel_open: bool,
    messages: Vec<Message>,
    exchange: ExchangeState,
    draft: String,
    next_id: u64,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            is_panel_open: false,
            messages: Vec::new(),
            exchange: ExchangeState::Idle,
            draft: String::new(),
            next_id: 1,
        }
    }
}

impl ConversationState {
    /// Empty, closed conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed conversation that opens with a bot greeting, if one is given
    pub fn with_greeting(greeting: Option<&str>) -> Self {
        let mut state = Self::new();
        if let Some(text) = greeting {
            let id = state.allocate_id();
            state.messages.push(Message::bot_notice(id, text));
        }
        state
    }

    pub fn is_panel_open(&self) -> bool {
        self.is_panel_open
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn exchange(&self) -> ExchangeState {
        self.exchange
    }

    /// Whether a request is in flight
    pub fn is_pending(&self) -> bool {
        matches!(self.exchange, ExchangeState::Sending(_))
    }

    /// Whether submitting the current draft would start an exchange
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.draft.trim().is_empty()
    }

    pub fn open(&mut self) {
        self.is_panel_open = true;
    }

    /// Close the panel. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_panel_open, false)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit the current draft.
    pub fn submit_draft(&mut self, token: &str) -> Option<PendingExchange> {
        let text = std::mem::take(&mut self.draft);
        let exchange = self.submit(&text, token);
        if exchange.is_none() {
            // Nothing was sent; keep what the user typed.
            self.draft = text;
        }
        exchange
    }

    /// Start an exchange for `text`.
    ///
    /// Returns `None` without touching state when `text` is blank or a
    /// request is already in flight. Otherwise appends the user message
    /// verbatim, clears the draft, and enters `Sending`.
    pub fn submit(&mut self, text: &str, token: &str) -> Option<PendingExchange> {
        if self.is_pending() || text.trim().is_empty() {
            return None;
        }

        let id = self.allocate_id();
        self.messages.push(Message::user(id, text));
        self.draft.clear();
        self.exchange = ExchangeState::Sending(id);

        Some(PendingExchange {
            message_id: id,
            request: ChatRequest::new(text, token),
        })
    }

    /// Complete `exchange` with `outcome`, appending the bot message.
    ///
    /// # Errors
    ///
    /// Rejects the reply, changing nothing, if no exchange is in flight or a
    /// different one is.
    pub fn resolve(
        &mut self,
        exchange: &PendingExchange,
        outcome: ReplyOutcome,
    ) -> Result<&Message, ExchangeError> {
        match self.exchange {
            ExchangeState::Idle => return Err(ExchangeError::NoPendingExchange),
            ExchangeState::Sending(active) if active != exchange.message_id => {
                return Err(ExchangeError::Mismatch {
                    expected: active,
                    actual: exchange.message_id,
                });
            }
            ExchangeState::Sending(_) => {}
        }

        let id = self.allocate_id();
        let reply = match outcome {
            Ok(text) => Message::bot_reply(id, text),
            Err(failure) => Message::bot_notice(id, failure.apology()),
        };
        self.messages.push(reply);
        self.exchange = ExchangeState::Idle;

        Ok(&self.messages[self.messages.len() - 1])
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
