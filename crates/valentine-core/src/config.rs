//! Configuration for a proposal session.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "offset_range": 140.0, "copy": { "question": "Will you be my Valentine?" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::evasion::OffsetRange;

/// Upper bound on confetti pieces in one burst.
pub const MAX_CONFETTI_PIECES: usize = 2_000;

/// Upper bound on floating background hearts.
pub const MAX_FLOATING_HEARTS: usize = 200;

/// How duplicated decline signals are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerPolicy {
    /// Every pointer-enter and every click counts, so a single hover-then-click
    /// gesture counts twice.
    #[default]
    EveryTrigger,
    /// A click that lands while the pointer is still on the control it just
    /// entered is absorbed into that hover.
    CoalesceHoverThenClick,
}

impl TriggerPolicy {
    pub fn name(self) -> &'static str {
        match self {
            TriggerPolicy::EveryTrigger => "every",
            TriggerPolicy::CoalesceHoverThenClick => "coalesce",
        }
    }
}

/// All text shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalCopy {
    pub greeting: String,
    pub teaser: String,
    pub start_label: String,
    pub question: String,
    pub accept_label: String,
    pub decline_label: String,
    /// Indexed by [`Encouragement::index`](crate::Encouragement::index).
    pub encouragements: [String; 4],
    pub celebration_title: String,
    pub celebration_subtitle: String,
    pub sign_off: String,
}

impl Default for ProposalCopy {
    fn default() -> Self {
        Self {
            greeting: "Hiya Darling!".to_string(),
            teaser: "I have something important to ask you...".to_string(),
            start_label: "Click here! 💕".to_string(),
            question: "Will you be my Valentine Sam?".to_string(),
            accept_label: "YES! 💖".to_string(),
            decline_label: "No".to_string(),
            encouragements: [
                "Pretty please? 🥺".to_string(),
                "The cats really want you to say yes! 😺".to_string(),
                "You can't say no forever! 💕".to_string(),
                "Just click YES already! 😸".to_string(),
            ],
            celebration_title: "YAY!".to_string(),
            celebration_subtitle: "Hehehehe, I Knew IT".to_string(),
            sign_off: "I'll see you on the 14th Ms.Samantha Lyons 💕".to_string(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalConfig {
    /// Half-extent of the decline control's jump, in CSS pixels.
    pub offset_range: OffsetRange,
    /// Counting rule for duplicated decline signals.
    pub trigger_policy: TriggerPolicy,
    /// Page text.
    pub copy: ProposalCopy,
    /// Pieces in the celebration burst.
    pub confetti_pieces: usize,
    /// CSS colors the confetti is drawn from.
    pub confetti_palette: Vec<String>,
    /// Hearts drifting up the background.
    pub floating_hearts: usize,
    /// Seed for offsets and decoration layout; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            offset_range: OffsetRange::default(),
            trigger_policy: TriggerPolicy::default(),
            copy: ProposalCopy::default(),
            confetti_pieces: 300,
            confetti_palette: ["#ff69b4", "#ff1493", "#ffc0cb", "#ff6eb4", "#db7093"]
                .into_iter()
                .map(String::from)
                .collect(),
            floating_hearts: 15,
            seed: None,
        }
    }
}

impl ProposalConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: ProposalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check bounds that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.confetti_pieces > MAX_CONFETTI_PIECES {
            return Err(ConfigError::CountTooLarge {
                field: "confetti_pieces",
                value: self.confetti_pieces,
                max: MAX_CONFETTI_PIECES,
            });
        }
        if self.floating_hearts > MAX_FLOATING_HEARTS {
            return Err(ConfigError::CountTooLarge {
                field: "floating_hearts",
                value: self.floating_hearts,
                max: MAX_FLOATING_HEARTS,
            });
        }
        Ok(())
    }

    pub fn with_offset_range(mut self, range: OffsetRange) -> Self {
        self.offset_range = range;
        self
    }

    pub fn with_trigger_policy(mut self, policy: TriggerPolicy) -> Self {
        self.trigger_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
