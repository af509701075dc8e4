//! Configuration types for the logging system

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Main logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level (can be overridden by RUST_LOG on native targets)
    pub default_level: String,

    /// Console output configuration
    pub console: ConsoleConfig,

    /// Per-target level overrides (e.g. `"palaver_core" => "debug"`)
    #[serde(default)]
    pub targets: HashMap<String, String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            targets: HashMap::new(),
        }
    }
}

impl LogConfig {
    /// Create a config for development (verbose human-readable output)
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                pretty: true,
                ansi: true,
                include_location: false,
            },
            targets: HashMap::new(),
        }
    }

    /// Create a config for testing (minimal output)
    pub fn testing() -> Self {
        Self {
            default_level: "warn".to_string(),
            console: ConsoleConfig {
                pretty: true,
                ansi: false,
                include_location: false,
            },
            targets: HashMap::new(),
        }
    }

    /// Override the level of one target
    pub fn with_target(mut self, target: impl Into<String>, level: impl Into<String>) -> Self {
        self.targets.insert(target.into(), level.into());
        self
    }

    /// Render as an `EnvFilter` directive string, targets sorted for stability
    pub fn filter_directives(&self) -> String {
        let mut targets: Vec<_> = self.targets.iter().collect();
        targets.sort();

        let mut directives = vec![self.default_level.clone()];
        directives.extend(targets.into_iter().map(|(t, l)| format!("{t}={l}")));
        directives.join(",")
    }
}

/// Console output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Use pretty (human-readable) format instead of JSON lines
    pub pretty: bool,
    /// Include ANSI colors
    pub ansi: bool,
    /// Include file/line information in JSON output
    pub include_location: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            pretty: false, // JSONL by default
            ansi: false,
            include_location: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, "info");
        assert!(!config.console.pretty); // JSONL by default
        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_development_config() {
        let config = LogConfig::development();
        assert_eq!(config.default_level, "debug");
        assert!(config.console.pretty);
        assert!(config.console.ansi);
    }

    #[test]
    fn test_filter_directives() {
        let config = LogConfig::testing()
            .with_target("palaver_ui", "info")
            .with_target("palaver_core", "debug");
        assert_eq!(
            config.filter_directives(),
            "warn,palaver_core=debug,palaver_ui=info"
        );
        assert_eq!(LogConfig::default().filter_directives(), "info");
    }

    #[test]
    fn test_config_from_json() {
        let config: LogConfig = serde_json::from_str(
            r#"{"default_level": "trace", "console": {"pretty": true, "ansi": false, "include_location": false}}"#,
        )
        .unwrap();
        assert_eq!(config.default_level, "trace");
        assert!(config.targets.is_empty());
    }
}
