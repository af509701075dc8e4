//! Desktop preview of the Palaver widget.
//!
//! Renders the widget in a native window against a real chat service so it
//! can be worked on without a host page.
//!
//! Environment:
//! - `PALAVER_TOKEN` (default `demo-token-123`)
//! - `PALAVER_BASE_URL` (default `http://localhost:3000`)
//! - `PALAVER_POSITION`: `bottom-right` or `bottom-left`
//! - `PALAVER_THEME`: `light` or `dark`

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use palaver_core::{Position, Theme, WidgetConfig};
use palaver_logging::{LogConfig, PalaverSubscriberBuilder};
use palaver_ui::App;

fn main() {
    if let Err(e) = PalaverSubscriberBuilder::new()
        .with_config(LogConfig::development())
        .init()
    {
        eprintln!("Logging disabled: {e}");
    }

    let config = config_from_env(|key| std::env::var(key).ok());
    tracing::info!(endpoint = %config.chat_endpoint(), "Starting Palaver preview");

    let window = WindowBuilder::new()
        .with_title("Palaver Preview")
        .with_inner_size(LogicalSize::new(480.0, 680.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(App);
}

fn config_from_env(var: impl Fn(&str) -> Option<String>) -> WidgetConfig {
    let token = var("PALAVER_TOKEN").unwrap_or_else(|| "demo-token-123".to_string());
    let base_url = var("PALAVER_BASE_URL").unwrap_or_else(|| "http://localhost:3000".to_string());
    let mut config = WidgetConfig::new(token, base_url);

    if let Some(raw) = var("PALAVER_POSITION") {
        match raw.parse::<Position>() {
            Ok(position) => config = config.with_position(position),
            Err(e) => tracing::warn!(error = %e, "Ignoring PALAVER_POSITION"),
        }
    }
    if let Some(raw) = var("PALAVER_THEME") {
        match raw.parse::<Theme>() {
            Ok(theme) => config = config.with_theme(theme),
            Err(e) => tracing::warn!(error = %e, "Ignoring PALAVER_THEME"),
        }
    }

    config
}
