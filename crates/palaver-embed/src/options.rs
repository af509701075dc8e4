//! Options accepted by the mount call

use palaver_core::{DEFAULT_GREETING, Position, Theme, WidgetConfig};
use serde::{Deserialize, Serialize};

use crate::error::MountError;

/// Everything the host page passes when mounting a widget.
///
/// Field names are camelCase on the wire so a page can pass a plain object:
///
/// ```json
/// { "selector": "#chat", "token": "demo-token-123", "baseUrl": "https://api.example.com" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedOptions {
    /// CSS selector of the container element
    pub selector: String,
    /// Auth token forwarded with every message
    pub token: String,
    /// Base URL of the chat service
    pub base_url: String,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Omitted: the default greeting. `null`: no greeting.
    #[serde(default = "default_greeting")]
    pub greeting: Option<String>,
}

fn default_greeting() -> Option<String> {
    Some(DEFAULT_GREETING.to_string())
}

impl EmbedOptions {
    pub fn new(
        selector: impl Into<String>,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            selector: selector.into(),
            token: token.into(),
            base_url: base_url.into(),
            position: None,
            theme: None,
            greeting: default_greeting(),
        }
    }

    /// Reject options that cannot produce a working widget.
    pub fn validate(&self) -> Result<(), MountError> {
        if self.selector.trim().is_empty() {
            return Err(MountError::InvalidOptions("selector is empty".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(MountError::InvalidOptions("baseUrl is empty".into()));
        }
        Ok(())
    }

    /// Split into the container selector and the widget configuration.
    pub fn into_parts(self) -> (String, WidgetConfig) {
        let mut config = WidgetConfig::new(self.token, self.base_url)
            .with_position(self.position.unwrap_or_default())
            .with_greeting(self.greeting);
        config.theme = self.theme;
        (self.selector, config)
    }
}
