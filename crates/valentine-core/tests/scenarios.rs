//! End-to-end session scenarios for the proposal state machine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use valentine_core::{
    Action, DeclineOffset, DeclineTrigger, Effect, Encouragement, FixedOffsets, MAX_OFFSET_EXTENT,
    OffsetRange, Phase, ProposalConfig, RandomOffsets, Session, TriggerPolicy,
};

fn decline() -> Action {
    Action::Decline(DeclineTrigger::Activate)
}

fn count_celebrations(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::PlayCelebration))
        .count()
}

/// Every session starts on the greeting screen.
#[test]
fn test_session_starts_at_intro() {
    let session = Session::new(RandomOffsets::seeded(1));
    assert_eq!(session.state().phase, Phase::Intro);
    assert_eq!(session.state().decline_count, 0);
    assert_eq!(session.state().decline_offset, DeclineOffset::default());
    assert_eq!(session.encouragement_text(), None);
}

/// Advance, decline three times, then accept.
#[test]
fn test_decline_three_times_then_accept() {
    let mut session = Session::new(RandomOffsets::seeded(2024));
    let mut all_effects = Vec::new();

    all_effects.extend(session.dispatch(Action::Advance));
    assert_eq!(session.state().phase, Phase::Question);

    for _ in 0..3 {
        all_effects.extend(session.dispatch(decline()));
    }
    assert_eq!(session.state().phase, Phase::Question);
    assert_eq!(session.state().decline_count, 3);
    assert_eq!(
        session.state().encouragement(),
        Some(Encouragement::CantSayNoForever)
    );
    assert_eq!(
        session.encouragement_text(),
        Some("You can't say no forever! 💕")
    );

    all_effects.extend(session.dispatch(Action::Accept));
    assert_eq!(session.state().phase, Phase::Celebrating);
    assert_eq!(count_celebrations(&all_effects), 1);
    assert_eq!(session.celebrations_played(), 1);
}

/// Accepting straight away never shows an encouragement.
#[test]
fn test_accept_without_declining() {
    let mut session = Session::new(RandomOffsets::seeded(5));
    let mut seen_messages = Vec::new();

    for action in [Action::Advance, Action::Accept] {
        session.dispatch(action);
        seen_messages.push(session.state().encouragement());
    }

    assert_eq!(session.state().phase, Phase::Celebrating);
    assert_eq!(session.state().decline_count, 0);
    assert!(seen_messages.iter().all(Option::is_none));
    assert_eq!(session.celebrations_played(), 1);
}

/// Each decline draws a fresh offset inside the configured range.
#[test]
fn test_offsets_stay_in_configured_range() {
    let range = OffsetRange::new(100.0).unwrap();
    let config = ProposalConfig::default().with_offset_range(range);
    let mut session = Session::with_config(RandomOffsets::seeded(77), config);
    session.dispatch(Action::Advance);

    for expected in 1..=50u32 {
        let effects = session.dispatch(decline());
        assert_eq!(session.state().decline_count, expected);
        assert!(range.contains(session.state().decline_offset));
        assert_eq!(
            effects,
            vec![Effect::Evaded {
                offset: session.state().decline_offset,
                count: expected
            }]
        );
    }
}

/// The widest accepted range still produces in-range jumps.
#[test]
fn test_declines_at_widest_range() {
    let range = OffsetRange::new(MAX_OFFSET_EXTENT).unwrap();
    let config = ProposalConfig::default().with_offset_range(range);
    let mut session = Session::with_config(RandomOffsets::seeded(404), config);
    session.dispatch(Action::Advance);

    for _ in 0..20 {
        session.dispatch(decline());
        assert!(range.contains(session.state().decline_offset));
    }
    assert_eq!(session.state().decline_count, 20);
}

/// Seeded sources make the whole offset sequence reproducible.
#[test]
fn test_seeded_sessions_are_deterministic() {
    let run = |seed| {
        let mut session = Session::new(RandomOffsets::seeded(seed));
        session.dispatch(Action::Advance);
        (0..10)
            .map(|_| {
                session.dispatch(decline());
                session.state().decline_offset
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(8), run(8));
    assert_ne!(run(8), run(9));
}

/// Nothing leads back out of the celebration.
#[test]
fn test_celebrating_is_terminal() {
    let mut session = Session::new(FixedOffsets::new([DeclineOffset::new(9.0, 9.0)]));
    session.dispatch(Action::Advance);
    session.dispatch(Action::Accept);
    let frozen = *session.state();

    for action in [
        Action::Advance,
        Action::Accept,
        Action::Decline(DeclineTrigger::PointerEnter),
        Action::Decline(DeclineTrigger::Activate),
    ] {
        assert!(session.dispatch(action).is_empty());
        assert_eq!(*session.state(), frozen);
    }
    assert_eq!(session.source().draws(), 0);
    assert_eq!(session.celebrations_played(), 1);
}

/// A hover followed by a click is two declines under the default policy.
///
/// This is the double-count path: one user gesture, two increments.
#[test]
fn test_hover_then_click_double_counts_by_default() {
    let mut session = Session::new(FixedOffsets::new([
        DeclineOffset::new(10.0, 0.0),
        DeclineOffset::new(0.0, 10.0),
    ]));
    session.dispatch(Action::Advance);

    session.dispatch(Action::Decline(DeclineTrigger::PointerEnter));
    session.dispatch(Action::Decline(DeclineTrigger::Activate));

    assert_eq!(session.state().decline_count, 2);
    assert_eq!(session.state().decline_offset, DeclineOffset::new(0.0, 10.0));
    assert_eq!(
        session.state().encouragement(),
        Some(Encouragement::CatsWantYes)
    );
}

/// The coalescing policy counts one per distinct discouragement.
#[test]
fn test_hover_then_click_counts_once_when_coalescing() {
    let config =
        ProposalConfig::default().with_trigger_policy(TriggerPolicy::CoalesceHoverThenClick);
    let mut session = Session::with_config(RandomOffsets::seeded(3), config);
    session.dispatch(Action::Advance);

    for _ in 0..3 {
        session.dispatch(Action::Decline(DeclineTrigger::PointerEnter));
        session.dispatch(Action::Decline(DeclineTrigger::Activate));
        session.dispatch(Action::Decline(DeclineTrigger::PointerLeave));
    }

    assert_eq!(session.state().decline_count, 3);
    assert_eq!(
        session.state().encouragement(),
        Some(Encouragement::CantSayNoForever)
    );
}

/// Keyboard-style activation without a hover still counts when coalescing.
#[test]
fn test_click_without_hover_counts_when_coalescing() {
    let config =
        ProposalConfig::default().with_trigger_policy(TriggerPolicy::CoalesceHoverThenClick);
    let mut session = Session::with_config(RandomOffsets::seeded(4), config);
    session.dispatch(Action::Advance);

    session.dispatch(decline());
    session.dispatch(decline());
    assert_eq!(session.state().decline_count, 2);
}

/// The celebration fires exactly when the session reaches the terminal phase.
#[test]
fn test_random_sessions_fire_celebration_at_most_once() {
    let actions = [
        Action::Advance,
        Action::Accept,
        Action::Decline(DeclineTrigger::PointerEnter),
        Action::Decline(DeclineTrigger::Activate),
        Action::Decline(DeclineTrigger::PointerLeave),
    ];

    for seed in 0..200u64 {
        let mut picker = StdRng::seed_from_u64(seed);
        let policy = if seed % 2 == 0 {
            TriggerPolicy::EveryTrigger
        } else {
            TriggerPolicy::CoalesceHoverThenClick
        };
        let config = ProposalConfig::default().with_trigger_policy(policy);
        let mut session = Session::with_config(RandomOffsets::seeded(seed), config);

        let mut fired = 0;
        let mut ever_celebrating = false;
        let mut left_intro = false;
        let steps = picker.random_range(0..40);
        for _ in 0..steps {
            let action = actions[picker.random_range(0..actions.len())];
            fired += count_celebrations(&session.dispatch(action));

            let phase = session.state().phase;
            ever_celebrating |= phase == Phase::Celebrating;
            if left_intro {
                assert_ne!(phase, Phase::Intro, "seed {seed} returned to intro");
            }
            left_intro |= phase != Phase::Intro;
            if phase != Phase::Question {
                assert_eq!(session.state().encouragement(), None);
            }
        }

        assert!(fired <= 1, "seed {seed} fired {fired} celebrations");
        assert_eq!(fired == 1, ever_celebrating, "seed {seed}");
        assert_eq!(session.celebrations_played() as usize, fired);
    }
}
