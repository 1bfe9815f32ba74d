//! Encouragement line shown above the buttons after each decline.

use serde::{Deserialize, Serialize};

use crate::config::ProposalCopy;

/// Which encouragement to show for the current decline count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encouragement {
    PrettyPlease,
    CatsWantYes,
    CantSayNoForever,
    /// Shown for the fourth decline and every one after it.
    JustClickYes,
}

impl Encouragement {
    /// Message for `count` declines; `None` before the first.
    pub fn for_count(count: u32) -> Option<Encouragement> {
        match count {
            0 => None,
            1 => Some(Encouragement::PrettyPlease),
            2 => Some(Encouragement::CatsWantYes),
            3 => Some(Encouragement::CantSayNoForever),
            _ => Some(Encouragement::JustClickYes),
        }
    }

    /// Position in [`ProposalCopy::encouragements`].
    pub fn index(self) -> usize {
        match self {
            Encouragement::PrettyPlease => 0,
            Encouragement::CatsWantYes => 1,
            Encouragement::CantSayNoForever => 2,
            Encouragement::JustClickYes => 3,
        }
    }

    pub fn text(self, copy: &ProposalCopy) -> &str {
        &copy.encouragements[self.index()]
    }
}
