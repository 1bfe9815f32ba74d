//! Proposal state and its transition function.
//!
//! [`ProposalState::apply`] never mutates its receiver; it returns the next
//! state together with the [`Effect`]s the view must carry out. [`Session`]
//! wraps that loop for callers that just want to feed actions in.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ProposalConfig, TriggerPolicy};
use crate::evasion::{DeclineOffset, OffsetSource, RandomOffsets};
use crate::messages::Encouragement;
use crate::phase::{Action, DeclineTrigger, Phase};

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// A new phase became active; render its view.
    PhaseEntered { phase: Phase },
    /// The decline control moved away.
    Evaded { offset: DeclineOffset, count: u32 },
    /// Play the celebration burst. Emitted at most once per state lineage.
    PlayCelebration,
}

/// All UI state for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalState {
    pub phase: Phase,
    /// Declines counted while the question was showing.
    pub decline_count: u32,
    /// Where the decline control currently sits.
    pub decline_offset: DeclineOffset,
    /// Set on entering [`Phase::Celebrating`]; never cleared.
    pub celebration_fired: bool,
    /// Most recent decline signal, used to coalesce hover-then-click.
    pub last_trigger: Option<DeclineTrigger>,
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ProposalState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: ProposalState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// Whether the action produced nothing for the view to do.
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }

    /// Whether the celebration burst must be played.
    pub fn plays_celebration(&self) -> bool {
        self.effects.contains(&Effect::PlayCelebration)
    }
}

impl ProposalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the state after `action`.
    ///
    /// Offsets are drawn from `source` only when a decline actually counts.
    pub fn apply<S>(&self, action: Action, source: &mut S, config: &ProposalConfig) -> Transition
    where
        S: OffsetSource + ?Sized,
    {
        match action {
            Action::Decline(trigger) => self.apply_decline(trigger, source, config),
            Action::Advance | Action::Accept => self.apply_phase_change(action),
        }
    }

    fn apply_phase_change(&self, action: Action) -> Transition {
        let phase = self.phase.next(action);
        if phase == self.phase {
            debug!(phase = %self.phase, ?action, "action ignored in current phase");
            return Transition::unchanged(*self);
        }

        let mut next = *self;
        next.phase = phase;
        let mut effects = vec![Effect::PhaseEntered { phase }];
        info!(from = %self.phase, to = %phase, "phase transition");

        if phase == Phase::Celebrating && !self.celebration_fired {
            next.celebration_fired = true;
            effects.push(Effect::PlayCelebration);
            info!(declines = self.decline_count, "celebration triggered");
        }

        Transition {
            state: next,
            effects,
        }
    }

    fn apply_decline<S>(
        &self,
        trigger: DeclineTrigger,
        source: &mut S,
        config: &ProposalConfig,
    ) -> Transition
    where
        S: OffsetSource + ?Sized,
    {
        if !self.phase.accepts_declines() {
            debug!(phase = %self.phase, ?trigger, "decline outside question ignored");
            return Transition::unchanged(*self);
        }

        let mut next = *self;
        next.last_trigger = Some(trigger);

        if !trigger.is_discouragement() {
            return Transition::unchanged(next);
        }

        let absorbed = config.trigger_policy == TriggerPolicy::CoalesceHoverThenClick
            && trigger == DeclineTrigger::Activate
            && self.last_trigger == Some(DeclineTrigger::PointerEnter);
        if absorbed {
            debug!(count = self.decline_count, "click coalesced with preceding hover");
            return Transition::unchanged(next);
        }

        let offset = source.next_offset(config.offset_range);
        next.decline_offset = offset;
        next.decline_count = self.decline_count.saturating_add(1);
        debug!(
            ?trigger,
            count = next.decline_count,
            x = offset.x,
            y = offset.y,
            "decline control evaded"
        );

        Transition {
            state: next,
            effects: vec![Effect::Evaded {
                offset,
                count: next.decline_count,
            }],
        }
    }

    /// Encouragement to show; only meaningful while the question is up.
    pub fn encouragement(&self) -> Option<Encouragement> {
        if self.phase == Phase::Question {
            Encouragement::for_count(self.decline_count)
        } else {
            None
        }
    }

    /// Offset the renderer should apply to the decline control.
    pub fn visible_offset(&self) -> DeclineOffset {
        if self.phase == Phase::Question {
            self.decline_offset
        } else {
            DeclineOffset::default()
        }
    }
}

/// A running session: state, offset source and config in one place.
#[derive(Debug)]
pub struct Session<S = RandomOffsets> {
    state: ProposalState,
    source: S,
    config: ProposalConfig,
    celebrations_played: u32,
}

impl Session<RandomOffsets> {
    /// Session seeded from `config.seed`, or from entropy when unset.
    pub fn from_config(config: ProposalConfig) -> Self {
        let source = match config.seed {
            Some(seed) => RandomOffsets::seeded(seed),
            None => RandomOffsets::from_entropy(),
        };
        Self::with_config(source, config)
    }
}

impl<S: OffsetSource> Session<S> {
    /// Session with the default config.
    pub fn new(source: S) -> Self {
        Self::with_config(source, ProposalConfig::default())
    }

    pub fn with_config(source: S, config: ProposalConfig) -> Self {
        Self {
            state: ProposalState::new(),
            source,
            config,
            celebrations_played: 0,
        }
    }

    /// Apply an action and return the effects it produced.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let transition = self.state.apply(action, &mut self.source, &self.config);
        if transition.plays_celebration() {
            self.celebrations_played += 1;
        }
        self.state = transition.state;
        transition.effects
    }

    pub fn state(&self) -> &ProposalState {
        &self.state
    }

    pub fn config(&self) -> &ProposalConfig {
        &self.config
    }

    /// Times the celebration effect has been requested.
    pub fn celebrations_played(&self) -> u32 {
        self.celebrations_played
    }

    /// Current encouragement text, if any.
    pub fn encouragement_text(&self) -> Option<&str> {
        self.state
            .encouragement()
            .map(|e| e.text(&self.config.copy))
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
