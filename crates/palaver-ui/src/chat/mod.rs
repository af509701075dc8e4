//! Chat components for the Palaver widget.
//!
//! A floating launcher plus a panel with header, message list, and input.
//! Components are stateless; [`crate::widget::ChatWidget`] owns the
//! controller and passes snapshots down.

pub mod launcher;
pub mod chat_panel;
pub mod chat_messages;
pub mod chat_bubble;
pub mod chat_input;

pub use launcher::Launcher;
pub use chat_panel::ChatPanel;
pub use chat_messages::ChatMessageList;
pub use chat_bubble::ChatBubble;
pub use chat_input::ChatInput;
