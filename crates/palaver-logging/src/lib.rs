//! Console logging setup for the Palaver widget
//!
//! All Palaver crates log through `tracing`. This crate installs the sink:
//!
//! - **Native** (desktop preview, tests): a `tracing-subscriber` registry with
//!   an `EnvFilter` (`RUST_LOG` wins over the configured level) and either
//!   JSON lines (default) or pretty console output.
//! - **Browser** (`wasm32`): `tracing` events are forwarded through its `log`
//!   bridge to `wasm-logger`, which writes to the developer console.
//!
//! # Quick Start
//!
//! ```ignore
//! use palaver_logging::{LogConfig, PalaverSubscriberBuilder};
//!
//! // JSON lines to stdout
//! PalaverSubscriberBuilder::new().init()?;
//!
//! // Pretty output for local development
//! PalaverSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init()?;
//! ```

pub mod config;

pub use config::{ConsoleConfig, LogConfig};

use thiserror::Error;

/// Errors raised while installing the global logger
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid filter directives: {0}")]
    Filter(String),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Builder for configuring and initializing the Palaver logging sink
#[derive(Debug, Clone, Default)]
pub struct PalaverSubscriberBuilder {
    config: LogConfig,
}

impl PalaverSubscriberBuilder {
    /// Create a new builder with default configuration
    ///
    /// Default: JSONL output to console at `info`
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Use pretty (human-readable) console output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Install the subscriber globally.
    ///
    /// Never panics; a second call returns [`LoggingError::AlreadyInitialized`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn init(self) -> Result<(), LoggingError> {
        use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(self.config.filter_directives())
                .map_err(|e| LoggingError::Filter(e.to_string()))?,
        };

        let registry = Registry::default().with(env_filter);
        let console = &self.config.console;

        let result = if console.pretty {
            let console_layer = tracing_subscriber::fmt::layer()
                .with_ansi(console.ansi)
                .with_target(true);
            registry.with(console_layer).try_init()
        } else {
            let console_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_file(console.include_location)
                .with_line_number(console.include_location);
            registry.with(console_layer).try_init()
        };

        result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
    }

    /// Route `tracing` events to the browser console.
    ///
    /// Target overrides are not applied in the browser; only the default level is.
    #[cfg(target_arch = "wasm32")]
    pub fn init(self) -> Result<(), LoggingError> {
        use std::sync::Once;

        static INIT: Once = Once::new();

        let level = to_log_level(parse_level(&self.config.default_level));
        let mut installed = false;
        INIT.call_once(|| {
            wasm_logger::init(wasm_logger::Config::new(level));
            installed = true;
        });

        if installed {
            Ok(())
        } else {
            Err(LoggingError::AlreadyInitialized("browser console logger".into()))
        }
    }
}

/// Parse a level name, falling back to `INFO` for anything unrecognized.
pub fn parse_level(name: &str) -> tracing::Level {
    name.trim().parse().unwrap_or(tracing::Level::INFO)
}

#[cfg(target_arch = "wasm32")]
fn to_log_level(level: tracing::Level) -> log::Level {
    match level {
        tracing::Level::TRACE => log::Level::Trace,
        tracing::Level::DEBUG => log::Level::Debug,
        tracing::Level::INFO => log::Level::Info,
        tracing::Level::WARN => log::Level::Warn,
        tracing::Level::ERROR => log::Level::Error,
    }
}
