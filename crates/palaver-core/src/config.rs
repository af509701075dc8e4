//! Widget configuration supplied once at mount time

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wire::CHAT_PATH;

/// Opening bot message of every new session.
pub const DEFAULT_GREETING: &str = "Hello! How can I help you today?";

/// Corner of the host page the widget is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
}

impl Position {
    /// Returns the CSS class value for this position.
    pub fn css_value(&self) -> &'static str {
        match self {
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
        }
    }
}

/// Color scheme. Presentation only; no logic depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// A position or theme name that is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bottom-right" => Ok(Position::BottomRight),
            "bottom-left" => Ok(Position::BottomLeft),
            other => Err(UnknownVariant {
                kind: "position",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownVariant {
                kind: "theme",
                value: other.to_string(),
            }),
        }
    }
}

/// Immutable per-session widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Opaque token forwarded with every message
    pub auth_token: String,
    /// Base URL of the chat service; `/api/chat` is appended
    pub endpoint_base_url: String,
    /// Where the launcher and panel sit
    #[serde(default)]
    pub position: Position,
    /// Optional color scheme
    #[serde(default)]
    pub theme: Option<Theme>,
    /// First bot message of the session (`None` for an empty history)
    #[serde(default = "default_greeting")]
    pub greeting: Option<String>,
}

fn default_greeting() -> Option<String> {
    Some(DEFAULT_GREETING.to_string())
}

impl WidgetConfig {
    /// Create a config with the default position, no theme, and the default greeting.
    pub fn new(auth_token: impl Into<String>, endpoint_base_url: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            endpoint_base_url: endpoint_base_url.into(),
            position: Position::default(),
            theme: None,
            greeting: default_greeting(),
        }
    }

    /// Set the display position
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set or clear the opening greeting
    pub fn with_greeting(mut self, greeting: Option<String>) -> Self {
        self.greeting = greeting;
        self
    }

    /// Full URL messages are posted to.
    ///
    /// One trailing `/` on the base URL is ignored.
    pub fn chat_endpoint(&self) -> String {
        let base = self
            .endpoint_base_url
            .strip_suffix('/')
            .unwrap_or(&self.endpoint_base_url);
        format!("{base}{CHAT_PATH}")
    }

    /// Theme to render with, falling back to light.
    pub fn effective_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::new("demo-token-123", "https://api.example.com");
        assert_eq!(config.position, Position::BottomRight);
        assert!(config.theme.is_none());
        assert_eq!(config.greeting.as_deref(), Some(DEFAULT_GREETING));
        assert_eq!(config.effective_theme(), Theme::Light);
    }

    #[test]
    fn test_chat_endpoint() {
        let config = WidgetConfig::new("t", "https://api.example.com");
        assert_eq!(config.chat_endpoint(), "https://api.example.com/api/chat");

        let config = WidgetConfig::new("t", "https://api.example.com/");
        assert_eq!(config.chat_endpoint(), "https://api.example.com/api/chat");

        let config = WidgetConfig::new("t", "http://localhost:8080/bots/7");
        assert_eq!(config.chat_endpoint(), "http://localhost:8080/bots/7/api/chat");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&Position::BottomLeft).unwrap(),
            "\"bottom-left\""
        );
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let pos: Position = serde_json::from_str("\"bottom-right\"").unwrap();
        assert_eq!(pos, Position::BottomRight);
        assert_eq!(Position::BottomLeft.css_value(), "bottom-left");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: WidgetConfig = serde_json::from_str(
            r#"{"auth_token": "abc", "endpoint_base_url": "https://x.test"}"#,
        )
        .unwrap();
        assert_eq!(config.position, Position::BottomRight);
        assert_eq!(config.greeting.as_deref(), Some(DEFAULT_GREETING));

        let config: WidgetConfig = serde_json::from_str(
            r#"{"auth_token": "abc", "endpoint_base_url": "https://x.test", "greeting": null, "theme": "dark"}"#,
        )
        .unwrap();
        assert!(config.greeting.is_none());
        assert_eq!(config.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("bottom-left".parse::<Position>(), Ok(Position::BottomLeft));
        assert_eq!(" dark ".parse::<Theme>(), Ok(Theme::Dark));

        let err = "top-left".parse::<Position>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown position 'top-left'");
    }
}
