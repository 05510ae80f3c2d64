//! Plays the built-in story from the first panel to the finale.

mod common;

use ringlock_core::rng::SeededRng;
use ringlock_debate::domain::arguments::Zone;
use ringlock_session::{ActionOutcome, PlayerAction};

/// Clicks next until the active panel hosts a puzzle.
fn read_until_puzzle(harness: &mut common::Harness) {
    while harness
        .session
        .view()
        .active_panel
        .is_some_and(|panel| panel.puzzle.is_none())
    {
        harness.session.dispatch(PlayerAction::Next { target: None });
        harness.advance(300);
    }
}

/// Waits out the ring celebration and the fade that follows it.
fn celebrate(harness: &mut common::Harness) {
    harness.advance(2500);
    harness.advance(300);
}

#[test]
fn test_full_playthrough_unlocks_all_rings_in_order() {
    let mut harness = common::start_with_rng(&mut SeededRng::seed_from_u64(214));

    // Ring 1
    read_until_puzzle(&mut harness);
    assert_eq!(harness.active_panel().as_deref(), Some("p1-game"));
    for payload in ["255,255,255", "185,25,35"] {
        harness.session.dispatch(PlayerAction::DropColor {
            payload: Some(payload.to_owned()),
        });
    }
    celebrate(&mut harness);
    assert_eq!(harness.active_panel().as_deref(), Some("p2-text"));

    // Ring 2
    read_until_puzzle(&mut harness);
    for card in [1, 3, 4] {
        harness.session.dispatch(PlayerAction::MoveCard {
            card,
            zone: Zone::Right,
        });
    }
    celebrate(&mut harness);
    assert_eq!(harness.active_panel().as_deref(), Some("interlude"));

    // Ring 3
    read_until_puzzle(&mut harness);
    assert_eq!(harness.active_panel().as_deref(), Some("p3-game"));
    harness.reveal_all();
    for piece in 0u8..4 {
        harness.session.dispatch(PlayerAction::DropPiece {
            payload: Some(piece.to_string()),
            slot: piece,
        });
    }
    celebrate(&mut harness);
    assert_eq!(harness.active_panel().as_deref(), Some("p4-text"));

    // Ring 4
    read_until_puzzle(&mut harness);
    assert_eq!(harness.active_panel().as_deref(), Some("p4-game"));
    assert_eq!(
        harness.session.dispatch(PlayerAction::CheckDate {
            value: "0307".to_owned()
        }),
        ActionOutcome::RingUnlocked {
            ring: ringlock_progress::domain::values::RingIndex::FOURTH
        }
    );
    celebrate(&mut harness);

    let view = harness.session.view();
    assert_eq!(harness.active_panel().as_deref(), Some("finale"));
    assert_eq!(view.progress.unlocked_count(), 4);
    assert_eq!(harness.rings_unlocked(), 4);
    assert_eq!(view.pending_tasks, 0);
    assert!(matches!(
        harness.session.dispatch(PlayerAction::Affirm),
        ActionOutcome::Affirmation { .. }
    ));
}
