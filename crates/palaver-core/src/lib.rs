//! # Palaver Core
//!
//! Conversation state, widget controller, and chat transport for the
//! Palaver embeddable chat widget.
//!
//! This crate has no UI dependency. The same controller drives the Dioxus
//! widget in `palaver-ui` and headless callers such as tests.
//!
//! ## Key Types
//!
//! - [`WidgetConfig`]: Token, endpoint, position and theme supplied at mount time
//! - [`ConversationState`]: Panel visibility, message history, draft and pending flag
//! - [`WidgetController`]: Orchestrates one submit → request → reply exchange
//! - [`ChatTransport`]: Seam for the network call ([`HttpTransport`], [`MockTransport`])
//! - [`ReplyFailure`]: Application vs transport failure, each with its apology string
//!
//! ## Example
//!
//! ```rust,ignore
//! use palaver_core::{HttpTransport, WidgetConfig, WidgetController};
//!
//! let config = WidgetConfig::new("demo-token-123", "https://api.example.com");
//! let transport = HttpTransport::new(&config);
//! let mut controller = WidgetController::new(config, transport);
//!
//! controller.open();
//! controller.set_draft("What are your opening hours?");
//! if let Some(reply) = controller.submit_draft().await {
//!     println!("bot: {}", reply.content);
//! }
//! ```

pub mod config;
pub mod controller;
pub mod conversation;
pub mod error;
pub mod message;
pub mod mock_transport;
pub mod transport;
pub mod wire;

pub use config::{DEFAULT_GREETING, Position, Theme, UnknownVariant, WidgetConfig};
pub use controller::WidgetController;
pub use conversation::{ConversationState, ExchangeState, PendingExchange};
pub use error::{ExchangeError, ReplyFailure, TransportError};
pub use message::{ContentFormat, Message, MessageId, Origin};
pub use mock_transport::MockTransport;
pub use transport::{ChatTransport, HttpTransport, ReplyOutcome, deliver};
pub use wire::{ChatRequest, ChatResponse, CHAT_PATH};
