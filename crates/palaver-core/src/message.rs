//! Conversation messages

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of one message within a conversation.
///
/// Ids are handed out in increasing order, so sorting by id gives display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl MessageId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Bot,
}

/// How message content should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Shown verbatim.
    #[default]
    Plain,
    /// Lightweight markup (paragraphs, code, lists, emphasis).
    Markup,
}

/// One entry in the conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub origin: Origin,
    pub format: ContentFormat,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text typed by the user.
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            origin: Origin::User,
            format: ContentFormat::Plain,
            created_at: Utc::now(),
        }
    }

    /// A reply returned by the chat service.
    pub fn bot_reply(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            origin: Origin::Bot,
            format: ContentFormat::Markup,
            created_at: Utc::now(),
        }
    }

    /// A bot-side notice (greeting or apology) shown verbatim.
    pub fn bot_notice(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            format: ContentFormat::Plain,
            ..Self::bot_reply(id, content)
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }

    /// Local `HH:MM` label for the creation time.
    pub fn time_label(&self) -> String {
        self.created_at
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_formats() {
        let user = Message::user(MessageId::new(1), "**hi**");
        assert!(user.is_user());
        assert_eq!(user.format, ContentFormat::Plain);

        let reply = Message::bot_reply(MessageId::new(2), "**hi**");
        assert_eq!(reply.origin, Origin::Bot);
        assert_eq!(reply.format, ContentFormat::Markup);

        let notice = Message::bot_notice(MessageId::new(3), "Hello!");
        assert_eq!(notice.origin, Origin::Bot);
        assert_eq!(notice.format, ContentFormat::Plain);
        assert_eq!(notice.id, MessageId::new(3));
    }

    #[test]
    fn test_time_label_shape() {
        let msg = Message::user(MessageId::new(1), "x");
        let label = msg.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
