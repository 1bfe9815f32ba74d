//! Logging bootstrap for the proposal page
//!
//! Console output (pretty or JSONL) plus an optional JSONL file, each with
//! its own level filter. `RUST_LOG` overrides the configured levels.
//!
//! # Quick Start
//!
//! ```ignore
//! use valentine_logging::{LogConfig, ValentineSubscriberBuilder};
//!
//! // Only non-blocking file output returns a guard; keep it alive
//! let _guard = ValentineSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//!
//! tracing::info!("ready");
//! ```

pub mod config;
pub mod layers;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::layers::BoxedLayer;

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter {directive:?}: {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to prepare log path {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create rolling log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Builder for configuring and initializing the logging subscriber
///
/// By default, console output uses JSONL format. Use `LogConfig::development()`
/// for human-readable pretty output during development.
pub struct ValentineSubscriberBuilder {
    config: LogConfig,
}

impl ValentineSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
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

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Initialize the subscriber globally, reporting failures on stderr
    ///
    /// Returns the file writer guard when the file is written non-blocking.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: failed to initialize logging: {}", e);
                None
            }
        }
    }

    /// Try to initialize the subscriber globally
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let mut stack: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        if self.config.console.enabled {
            let filter = layers::build_filter(self.config.console_level())?;
            stack.push(layers::console_layer(
                &self.config.console,
                &self.config.jsonl,
                filter,
            ));
        }

        if let Some(file_config) = &self.config.file {
            let (writer, file_guard) = layers::file_writer(file_config)?;
            let filter = layers::build_filter(&self.config.default_level)?;
            stack.push(layers::jsonl_layer(writer, &self.config.jsonl, filter));
            guard = file_guard;
        }

        Registry::default().with(stack).try_init()?;
        Ok(guard)
    }
}

impl Default for ValentineSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize logging for development (verbose, pretty console output)
pub fn init_development() {
    ValentineSubscriberBuilder::new()
        .with_config(LogConfig::development())
        .init();
}

/// Initialize logging for testing (minimal output); safe to call repeatedly
pub fn init_testing() {
    let _ = ValentineSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}
