//! UI components for the proposal page.

pub mod app;
pub mod celebration;
pub mod confetti;
pub mod hearts;
pub mod icons;
pub mod intro;
pub mod question;

pub use app::{App, ProposalController};
pub use celebration::CelebrationScreen;
pub use confetti::ConfettiLayer;
pub use hearts::FloatingHearts;
pub use icons::{CatIcon, HeartIcon, SparklesIcon};
pub use intro::IntroScreen;
pub use question::QuestionScreen;
