//! Root application component with phase routing.

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_core::{
    Action, ConfettiBurst, Effect, FloatingHeart, Phase, ProposalConfig, ProposalState,
    RandomOffsets,
};

use crate::settings;
use crate::theme::{Theme, ThemedRoot};

use super::{CelebrationScreen, ConfettiLayer, FloatingHearts, IntroScreen, QuestionScreen};

/// Offset between the button seed and the decoration seed, so the two
/// streams differ when a single seed is configured.
const DECOR_SEED_SALT: u64 = 0x14_02;

fn offset_source(config: &ProposalConfig) -> RandomOffsets {
    match config.seed {
        Some(seed) => RandomOffsets::seeded(seed),
        None => RandomOffsets::from_entropy(),
    }
}

fn decor_rng(config: &ProposalConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(DECOR_SEED_SALT)),
        None => StdRng::from_os_rng(),
    }
}

/// Handles to all session signals; every UI callback routes through here.
#[derive(Clone, Copy, PartialEq)]
pub struct ProposalController {
    pub state: Signal<ProposalState>,
    config: Signal<ProposalConfig>,
    offsets: Signal<RandomOffsets>,
    decor: Signal<StdRng>,
    confetti: Signal<Option<ConfettiBurst>>,
}

impl ProposalController {
    /// Fresh session signals, owned by the current scope.
    pub fn new(config: ProposalConfig) -> Self {
        Self {
            state: Signal::new(ProposalState::new()),
            offsets: Signal::new(offset_source(&config)),
            decor: Signal::new(decor_rng(&config)),
            confetti: Signal::new(None),
            config: Signal::new(config),
        }
    }

    /// The burst being shown, if the celebration has started.
    pub fn confetti(&self) -> Option<ConfettiBurst> {
        self.confetti.read().clone()
    }

    /// Lay out the background hearts from the decoration stream.
    pub fn scatter_hearts(self) -> Vec<FloatingHeart> {
        let mut decor = self.decor;
        let count = self.config.peek().floating_hearts;
        FloatingHeart::scatter(&mut *decor.write(), count)
    }

    /// Apply `action` and carry out the effects it returns.
    pub fn dispatch(self, action: Action) {
        let mut state = self.state;
        let mut offsets = self.offsets;

        let transition = {
            let config = self.config.read();
            let current = *state.read();
            current.apply(action, &mut *offsets.write(), &config)
        };

        state.set(transition.state);
        for effect in transition.effects {
            self.handle(effect);
        }
    }

    fn handle(self, effect: Effect) {
        match effect {
            Effect::PhaseEntered { phase } => {
                tracing::info!(%phase, "showing screen");
            }
            Effect::Evaded { offset, count } => {
                tracing::debug!(count, x = offset.x, y = offset.y, "no button moved");
            }
            Effect::PlayCelebration => {
                let mut decor = self.decor;
                let mut confetti = self.confetti;
                let burst = {
                    let config = self.config.read();
                    ConfettiBurst::generate(
                        &mut *decor.write(),
                        config.confetti_pieces,
                        &config.confetti_palette,
                    )
                };
                tracing::info!(pieces = burst.len(), "playing celebration");
                confetti.set(Some(burst));
            }
        }
    }
}

/// Root application component.
#[component]
pub fn App() -> Element {
    let controller = use_hook(|| {
        let config = settings::proposal_config();
        tracing::info!(
            seed = ?config.seed,
            policy = config.trigger_policy.name(),
            "proposal session started"
        );
        ProposalController::new(config)
    });

    // Laid out once; re-renders reuse the same hearts.
    let hearts = use_hook(|| controller.scatter_hearts());

    let state = controller.state;
    let config = controller.config;
    let snapshot = *state.read();
    let copy = config.read().copy.clone();

    rsx! {
        ThemedRoot {
            theme: Theme::Blush,
            div {
                class: "proposal-page",
                "data-phase": "{snapshot.phase}",

                FloatingHearts { hearts }

                if let Some(burst) = controller.confetti() {
                    ConfettiLayer { burst }
                }

                main {
                    class: "stage",

                    {match snapshot.phase {
                        Phase::Intro => rsx! {
                            IntroScreen {
                                copy,
                                on_advance: move |_| controller.dispatch(Action::Advance),
                            }
                        },
                        Phase::Question => rsx! {
                            QuestionScreen {
                                state: snapshot,
                                copy,
                                on_accept: move |_| controller.dispatch(Action::Accept),
                                on_decline: move |trigger| {
                                    controller.dispatch(Action::Decline(trigger))
                                },
                            }
                        },
                        Phase::Celebrating => rsx! {
                            CelebrationScreen { copy }
                        },
                    }}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valentine_core::{DeclineTrigger, OffsetRange, OffsetSource};

    /// Run `f` inside the root scope of an empty dom, so signals have an owner.
    fn with_scope<T>(f: impl FnOnce() -> T) -> T {
        let mut dom = VirtualDom::new(|| rsx! {});
        dom.rebuild_in_place();
        dom.in_scope(ScopeId::ROOT, f)
    }

    #[test]
    fn test_confetti_is_generated_once() {
        with_scope(|| {
            let config = ProposalConfig::default().with_seed(14);
            let pieces = config.confetti_pieces;
            let controller = ProposalController::new(config);

            controller.dispatch(Action::Advance);
            controller.dispatch(Action::Decline(DeclineTrigger::Activate));
            assert_eq!(controller.confetti(), None);

            controller.dispatch(Action::Accept);
            let first = controller.confetti().expect("burst after accepting");
            assert_eq!(first.len(), pieces);

            controller.dispatch(Action::Accept);
            controller.dispatch(Action::Decline(DeclineTrigger::PointerEnter));
            assert_eq!(controller.confetti(), Some(first));
            assert_eq!(controller.state.peek().phase, Phase::Celebrating);
        });
    }

    #[test]
    fn test_rewound_state_does_not_replay_confetti() {
        with_scope(|| {
            let controller = ProposalController::new(ProposalConfig::default().with_seed(2));
            controller.dispatch(Action::Advance);
            controller.dispatch(Action::Accept);
            let first = controller.confetti();
            assert!(first.is_some());

            // Force the question back on screen with the latch still set.
            let mut state = controller.state;
            let rewound = ProposalState {
                phase: Phase::Question,
                ..*state.peek()
            };
            state.set(rewound);
            controller.dispatch(Action::Accept);

            assert_eq!(controller.state.peek().phase, Phase::Celebrating);
            assert_eq!(controller.confetti(), first);
        });
    }

    #[test]
    fn test_seeded_sources_are_reproducible() {
        let config = ProposalConfig::default().with_seed(21);
        let range = OffsetRange::default();
        assert_eq!(
            offset_source(&config).next_offset(range),
            offset_source(&config).next_offset(range)
        );
    }

    #[test]
    fn test_decor_stream_differs_from_offsets() {
        let config = ProposalConfig::default().with_seed(21);
        let hearts_a = FloatingHeart::scatter(&mut decor_rng(&config), 3);
        let hearts_b = FloatingHeart::scatter(&mut decor_rng(&config), 3);
        assert_eq!(hearts_a, hearts_b);

        let mut same_seed = StdRng::seed_from_u64(21);
        assert_ne!(hearts_a, FloatingHeart::scatter(&mut same_seed, 3));
    }
}
