//! The three-screen view state machine.

use serde::{Deserialize, Serialize};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Greeting screen with the start button.
    #[default]
    Intro,
    /// The question, with the accept button and the evasive decline button.
    Question,
    /// Terminal screen shown after the question is accepted.
    Celebrating,
}

/// Raw UI signal that produced a decline.
///
/// The decline control reacts to the pointer reaching it as well as to an
/// explicit click, so one gesture can deliver both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclineTrigger {
    /// Pointer entered the decline control.
    PointerEnter,
    /// Decline control was clicked or otherwise activated.
    Activate,
    /// Pointer left the decline control. Never counts as a decline.
    PointerLeave,
}

impl DeclineTrigger {
    /// Whether this trigger can move the control and bump the counter.
    pub fn is_discouragement(self) -> bool {
        !matches!(self, DeclineTrigger::PointerLeave)
    }
}

/// A user action fed to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Leave the greeting screen.
    Advance,
    /// Say yes.
    Accept,
    /// Try to say no.
    Decline(DeclineTrigger),
}

impl Phase {
    /// Phase reached from `self` under `action`.
    ///
    /// Total: actions that mean nothing in the current phase leave it unchanged.
    /// A decline never changes the phase.
    pub fn next(self, action: Action) -> Phase {
        match (self, action) {
            (Phase::Intro, Action::Advance) => Phase::Question,
            (Phase::Question, Action::Accept) => Phase::Celebrating,
            (phase, _) => phase,
        }
    }

    /// Celebrating has no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Celebrating)
    }

    /// Whether the decline control is on screen.
    pub fn accepts_declines(self) -> bool {
        matches!(self, Phase::Question)
    }

    /// Stable lower-case name, used for log fields and CSS classes.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Question => "question",
            Phase::Celebrating => "celebrating",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [Action; 5] = [
        Action::Advance,
        Action::Accept,
        Action::Decline(DeclineTrigger::PointerEnter),
        Action::Decline(DeclineTrigger::Activate),
        Action::Decline(DeclineTrigger::PointerLeave),
    ];

    #[test]
    fn test_default_is_intro() {
        assert_eq!(Phase::default(), Phase::Intro);
    }

    #[test]
    fn test_forward_path() {
        let phase = Phase::Intro.next(Action::Advance);
        assert_eq!(phase, Phase::Question);
        assert_eq!(phase.next(Action::Accept), Phase::Celebrating);
    }

    #[test]
    fn test_intro_ignores_answers() {
        assert_eq!(Phase::Intro.next(Action::Accept), Phase::Intro);
        assert_eq!(
            Phase::Intro.next(Action::Decline(DeclineTrigger::Activate)),
            Phase::Intro
        );
    }

    #[test]
    fn test_decline_is_a_self_loop() {
        for trigger in [
            DeclineTrigger::PointerEnter,
            DeclineTrigger::Activate,
            DeclineTrigger::PointerLeave,
        ] {
            assert_eq!(Phase::Question.next(Action::Decline(trigger)), Phase::Question);
        }
    }

    #[test]
    fn test_question_never_returns_to_intro() {
        for action in ALL_ACTIONS {
            assert_ne!(Phase::Question.next(action), Phase::Intro);
        }
    }

    #[test]
    fn test_celebrating_is_terminal() {
        assert!(Phase::Celebrating.is_terminal());
        for action in ALL_ACTIONS {
            assert_eq!(Phase::Celebrating.next(action), Phase::Celebrating);
        }
    }

    #[test]
    fn test_pointer_leave_is_not_a_discouragement() {
        assert!(DeclineTrigger::PointerEnter.is_discouragement());
        assert!(DeclineTrigger::Activate.is_discouragement());
        assert!(!DeclineTrigger::PointerLeave.is_discouragement());
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Intro.to_string(), "intro");
        assert_eq!(Phase::Question.name(), "question");
        assert_eq!(Phase::Celebrating.name(), "celebrating");
    }
}
