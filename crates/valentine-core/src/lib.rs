//! Core logic for the proposal page.
//!
//! Everything in this crate is framework-free: the view layer owns a
//! [`ProposalState`], feeds it [`Action`]s and reacts to the [`Effect`]s the
//! transition returns. Decorative motion is described by plain data in
//! [`decor`] and left to the renderer.
//!
//! # Quick Start
//!
//! ```
//! use valentine_core::{Action, DeclineTrigger, Phase, RandomOffsets, Session};
//!
//! let mut session = Session::new(RandomOffsets::seeded(7));
//! session.dispatch(Action::Advance);
//! session.dispatch(Action::Decline(DeclineTrigger::Activate));
//! assert_eq!(session.state().decline_count, 1);
//!
//! session.dispatch(Action::Accept);
//! assert_eq!(session.state().phase, Phase::Celebrating);
//! assert_eq!(session.celebrations_played(), 1);
//! ```

pub mod config;
pub mod decor;
pub mod error;
pub mod evasion;
pub mod messages;
pub mod phase;
pub mod session;

pub use config::{ProposalConfig, ProposalCopy, TriggerPolicy};
pub use decor::{ConfettiBurst, ConfettiPiece, FloatingHeart, Pulse, SpringTransition};
pub use error::{ConfigError, ConfigResult};
pub use evasion::{
    DeclineOffset, FixedOffsets, MAX_OFFSET_EXTENT, OffsetRange, OffsetSource, RandomOffsets,
};
pub use messages::Encouragement;
pub use phase::{Action, DeclineTrigger, Phase};
pub use session::{Effect, ProposalState, Session, Transition};
