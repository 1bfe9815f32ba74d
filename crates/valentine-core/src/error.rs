//! Error types for configuration loading.
//!
//! Phase transitions never fail; only building a [`ProposalConfig`] can.
//!
//! [`ProposalConfig`]: crate::ProposalConfig

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "offset range must be between 0 and {max} pixels (got {0})",
        max = crate::evasion::MAX_OFFSET_EXTENT
    )]
    InvalidOffsetRange(f64),

    #[error("{field} must be at most {max} (got {value})")]
    CountTooLarge {
        field: &'static str,
        value: usize,
        max: usize,
    },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
