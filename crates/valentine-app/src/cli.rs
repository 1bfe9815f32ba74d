//! Command line arguments.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use valentine_core::{OffsetRange, ProposalConfig, TriggerPolicy};
use valentine_logging::LogConfig;

/// Counting rule for a hover followed by a click on "No".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Hover and click each count
    Every,
    /// A click right after the hover that caused it counts once
    Coalesce,
}

impl From<PolicyArg> for TriggerPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Every => TriggerPolicy::EveryTrigger,
            PolicyArg::Coalesce => TriggerPolicy::CoalesceHoverThenClick,
        }
    }
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "valentine")]
#[command(about = "An animated proposal page with a No button that runs away")]
pub struct Args {
    /// Path to a JSON config file (text, range, policy, decoration counts)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for button offsets and decoration layout (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How a hover followed by a click on "No" is counted
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// How far the "No" button may jump on each axis, in pixels
    #[arg(long)]
    pub range: Option<f64>,

    /// Write a JSONL session log into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Debug-level console logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Window width in logical pixels
    #[arg(long, default_value = "1100")]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value = "800")]
    pub height: f64,
}

impl Args {
    /// Load the config file (if any) and layer the flags over it.
    pub fn resolve_config(&self) -> anyhow::Result<ProposalConfig> {
        let mut config = match &self.config {
            Some(path) => ProposalConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ProposalConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(policy) = self.policy {
            config.trigger_policy = policy.into();
        }
        if let Some(range) = self.range {
            config.offset_range = OffsetRange::new(range).context("--range")?;
        }
        Ok(config)
    }

    /// Logging setup implied by the flags.
    pub fn log_config(&self) -> LogConfig {
        let mut config = match &self.log_dir {
            Some(dir) => LogConfig::desktop(dir.clone()),
            None => LogConfig {
                console: valentine_logging::ConsoleConfig {
                    enabled: true,
                    pretty: true,
                    ansi: true,
                    level: None,
                },
                ..LogConfig::default()
            },
        };
        if self.verbose {
            config.console.level = Some("debug".to_string());
        }
        config
    }
}
