//! Logging settings and the presets the app picks from

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Console plus optional file output, each with its own level
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level for the file and for a console without its own level.
    /// `RUST_LOG` takes precedence when set.
    pub default_level: String,
    pub console: ConsoleConfig,
    pub file: Option<FileConfig>,
    pub jsonl: JsonlConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: None,
            jsonl: JsonlConfig::default(),
        }
    }
}

impl LogConfig {
    /// Pretty console at debug
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: true,
                level: Some("debug".to_string()),
            },
            ..Default::default()
        }
    }

    /// Uncoloured JSONL console, warnings and up
    pub fn testing() -> Self {
        Self {
            default_level: "warn".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: false,
                ansi: false,
                level: Some("warn".to_string()),
            },
            ..Default::default()
        }
    }

    /// Pretty console at info plus a debug-level JSONL session file,
    /// written synchronously
    pub fn desktop(log_dir: PathBuf) -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: true,
                level: Some("info".to_string()),
            },
            file: Some(FileConfig {
                directory: log_dir,
                prefix: "valentine".to_string(),
                rotation: RotationStrategy::Never,
                // The desktop event loop ends the process without unwinding,
                // so no guard would ever be dropped.
                non_blocking: false,
            }),
            jsonl: JsonlConfig::default(),
        }
    }

    pub fn console_level(&self) -> &str {
        self.console.level.as_deref().unwrap_or(&self.default_level)
    }
}

/// Where console lines go and how they look
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Human-readable text instead of JSONL
    pub pretty: bool,
    pub ansi: bool,
    /// Console-only level; `None` uses `default_level`
    pub level: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pretty: false,
            ansi: false,
            level: None,
        }
    }
}

/// JSONL session file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub directory: PathBuf,
    /// File name stem; `Never` writes `<prefix>.log`
    pub prefix: String,
    pub rotation: RotationStrategy,
    /// Hand lines to a background worker. The returned guard must then be
    /// dropped before exit or the tail of the file is lost.
    pub non_blocking: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            prefix: "valentine".to_string(),
            rotation: RotationStrategy::Daily,
            non_blocking: true,
        }
    }
}

/// When the session file starts over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RotationStrategy {
    /// New dated file each day
    #[default]
    Daily,
    /// One file, truncated at startup
    Never,
}

/// Shape of each JSONL record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonlConfig {
    /// Event fields at the top level instead of under `fields`
    pub flatten_events: bool,
    pub include_spans: bool,
    /// Source file and line of the call site
    pub include_location: bool,
}

impl Default for JsonlConfig {
    fn default() -> Self {
        Self {
            flatten_events: true,
            include_spans: true,
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
        assert!(config.console.enabled);
        assert!(!config.console.pretty);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_development_config() {
        let config = LogConfig::development();
        assert_eq!(config.default_level, "debug");
        assert!(config.console.pretty);
        assert!(config.console.ansi);
    }

    #[test]
    fn test_desktop_config() {
        let config = LogConfig::desktop(PathBuf::from("/tmp/valentine-logs"));
        assert_eq!(config.console_level(), "info");
        let file = config.file.unwrap();
        assert_eq!(file.rotation, RotationStrategy::Never);
        assert_eq!(file.prefix, "valentine");
        assert!(!file.non_blocking);
    }

    #[test]
    fn test_console_level_falls_back_to_default() {
        let mut config = LogConfig::default();
        config.console.level = None;
        config.default_level = "trace".to_string();
        assert_eq!(config.console_level(), "trace");
    }

    #[test]
    fn test_partial_json() {
        let config: LogConfig =
            serde_json::from_str(r#"{"default_level": "warn"}"#).unwrap();
        assert_eq!(config.default_level, "warn");
        assert!(config.console.enabled);
        assert!(config.jsonl.flatten_events);
    }

    #[test]
    fn test_removed_options_are_rejected() {
        let hourly = serde_json::from_str::<RotationStrategy>(r#""Hourly""#);
        assert!(hourly.is_err());
    }
}
