//! Widget controller
//!
//! Owns the [`ConversationState`] of one widget instance together with its
//! configuration and transport, and drives each exchange through
//! `Idle → Sending → (Resolved | Failed) → Idle`.
//!
//! UI event loops cannot hold a borrow of the controller across the network
//! await, so an exchange is split in three steps:
//!
//! 1. [`WidgetController::begin_exchange`] appends the user message
//! 2. [`deliver`] runs the request against a clone of [`WidgetController::transport`]
//! 3. [`WidgetController::complete_exchange`] appends the bot message
//!
//! [`WidgetController::submit_draft`] chains the three for headless callers.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::conversation::{ConversationState, PendingExchange};
use crate::error::ExchangeError;
use crate::message::Message;
use crate::transport::{ChatTransport, ReplyOutcome, deliver};

type CloseCallback = Box<dyn FnMut()>;

/// Controller for one mounted widget
pub struct WidgetController<T> {
    config: WidgetConfig,
    transport: T,
    state: ConversationState,
    on_close: Option<CloseCallback>,
}

impl<T: fmt::Debug> fmt::Debug for WidgetController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetController")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .field("state", &self.state)
            .field("has_close_callback", &self.on_close.is_some())
            .finish()
    }
}

impl<T: ChatTransport> WidgetController<T> {
    /// Create a controller whose history starts with the configured greeting
    pub fn new(config: WidgetConfig, transport: T) -> Self {
        let state = ConversationState::with_greeting(config.greeting.as_deref());
        Self {
            config,
            transport,
            state,
            on_close: None,
        }
    }

    /// Register a callback fired whenever the panel goes from open to closed
    pub fn with_close_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn open(&mut self) {
        self.state.open();
    }

    /// Close the panel. History is kept; a request in flight still completes.
    pub fn close(&mut self) {
        if self.state.close() {
            debug!("Chat panel closed");
            if let Some(callback) = self.on_close.as_mut() {
                callback();
            }
        }
    }

    /// Launcher button behavior
    pub fn toggle(&mut self) {
        if self.state.is_panel_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    /// Synchronous half of a submit: append the user message and enter `Sending`.
    ///
    /// Returns `None` for a blank draft or while a request is in flight.
    pub fn begin_exchange(&mut self) -> Option<PendingExchange> {
        let exchange = self.state.submit_draft(&self.config.auth_token)?;
        info!(message_id = %exchange.message_id, "Sending chat message");
        Some(exchange)
    }

    /// Append the reply for `exchange` and return to `Idle`.
    pub fn complete_exchange(
        &mut self,
        exchange: &PendingExchange,
        outcome: ReplyOutcome,
    ) -> Result<&Message, ExchangeError> {
        if let Err(failure) = &outcome {
            warn!(message_id = %exchange.message_id, error = %failure, "Chat exchange failed");
        }
        self.state.resolve(exchange, outcome)
    }

    /// Submit the current draft and wait for the reply.
    ///
    /// Returns the bot message, or `None` if nothing was sent.
    pub async fn submit_draft(&mut self) -> Option<&Message> {
        let exchange = self.begin_exchange()?;
        let outcome = deliver(&self.transport, &exchange.request).await;
        match self.complete_exchange(&exchange, outcome) {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!(error = %e, "Dropped chat reply");
                None
            }
        }
    }
}
