//! Integration tests for the four puzzles as driven through the dispatcher.

mod common;

use ringlock_audio::ToneKind;
use ringlock_core::rng::SeededRng;
use ringlock_debate::domain::arguments::Zone;
use ringlock_progress::domain::values::RingIndex;
use ringlock_session::{ActionOutcome, PlayerAction};

fn drop_color(payload: &str) -> PlayerAction {
    PlayerAction::DropColor {
        payload: Some(payload.to_owned()),
    }
}

fn move_card(card: u8, zone: Zone) -> PlayerAction {
    PlayerAction::MoveCard { card, zone }
}

fn drop_piece(piece: &str, slot: u8) -> PlayerAction {
    PlayerAction::DropPiece {
        payload: Some(piece.to_owned()),
        slot,
    }
}

fn check_date(value: &str) -> PlayerAction {
    PlayerAction::CheckDate {
        value: value.to_owned(),
    }
}

// --- Color mix ---

#[test]
fn test_red_heavy_mix_does_not_unlock() {
    // Arrange
    let mut harness = common::start();
    harness.go_to("p1-game");

    // Act
    for payload in ["255,0,0", "255,200,150", "255,150,150"] {
        assert_eq!(harness.session.dispatch(drop_color(payload)), ActionOutcome::Accepted);
    }

    // Assert
    let view = harness.session.view();
    let mean = view.color_mix.mean.unwrap();
    assert_eq!((mean.red, mean.green, mean.blue), (255, 117, 100));
    assert_eq!(harness.rings_unlocked(), 0);
}

#[test]
fn test_reset_empties_the_bowl() {
    let mut harness = common::start();
    harness.go_to("p1-game");
    harness.session.dispatch(drop_color("255,0,0"));

    let outcome = harness.session.dispatch(PlayerAction::ResetMix);

    assert_eq!(outcome, ActionOutcome::Accepted);
    let view = harness.session.view();
    assert_eq!(view.color_mix.sample_count, 0);
    assert!(view.color_mix.mean.is_none());
}

#[test]
fn test_malformed_color_drops_change_nothing() {
    let mut harness = common::start();
    harness.go_to("p1-game");
    let before = harness.session.view().journal_len;

    for action in [
        PlayerAction::DropColor { payload: None },
        drop_color("255,0"),
        drop_color("red,green,blue"),
        drop_color("300,0,0"),
    ] {
        let outcome = harness.session.dispatch(action);
        assert!(matches!(outcome, ActionOutcome::Ignored { .. }));
    }

    assert_eq!(harness.session.view().journal_len, before);
}

// --- Argument sort ---

#[test]
fn test_three_banes_on_the_right_unlock_ring_two_once() {
    // Arrange
    let mut harness = common::start();
    harness.go_to("p2-game");
    harness.session.dispatch(move_card(1, Zone::Right));
    harness.session.dispatch(move_card(3, Zone::Right));

    // Act
    let outcome = harness.session.dispatch(move_card(4, Zone::Right));
    let after = harness.session.dispatch(move_card(0, Zone::Right));

    // Assert
    assert_eq!(
        outcome,
        ActionOutcome::RingUnlocked {
            ring: RingIndex::SECOND
        }
    );
    assert!(matches!(after, ActionOutcome::Ignored { .. }));
    assert_eq!(harness.rings_unlocked(), 1);
    assert!(harness.session.view().debate.solved);
}

#[test]
fn test_two_banes_and_all_boons_do_not_unlock() {
    let mut harness = common::start();
    harness.go_to("p2-game");

    for card in [0, 1, 2, 3, 5] {
        harness.session.dispatch(move_card(card, Zone::Right));
    }

    assert_eq!(harness.rings_unlocked(), 0);
    assert_eq!(harness.session.view().debate.right_banes, 2);
}

#[test]
fn test_moving_a_bane_back_left_uncounts_it() {
    let mut harness = common::start();
    harness.go_to("p2-game");
    harness.session.dispatch(move_card(1, Zone::Right));
    harness.session.dispatch(move_card(3, Zone::Right));
    harness.session.dispatch(move_card(1, Zone::Left));

    let outcome = harness.session.dispatch(move_card(4, Zone::Right));

    assert_eq!(outcome, ActionOutcome::Accepted);
    assert_eq!(harness.rings_unlocked(), 0);
}

#[test]
fn test_unknown_card_is_ignored() {
    let mut harness = common::start();
    harness.go_to("p2-game");

    let outcome = harness.session.dispatch(move_card(6, Zone::Right));

    assert!(matches!(outcome, ActionOutcome::Ignored { .. }));
}

#[test]
fn test_same_seed_deals_same_deck() {
    let first = common::start_with_rng(&mut SeededRng::seed_from_u64(14));
    let second = common::start_with_rng(&mut SeededRng::seed_from_u64(14));

    let order = |harness: &common::Harness| -> Vec<u8> {
        harness
            .session
            .view()
            .debate
            .cards
            .iter()
            .map(|card| card.id.get())
            .collect()
    };

    let mut sorted = order(&first);
    assert_eq!(order(&first), order(&second));
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
}

// --- Jigsaw ---

#[test]
fn test_correct_answer_reveals_piece_with_a_click() {
    // Arrange
    let mut harness = common::start();
    harness.go_to("p3-game");
    let clicks = harness.audio.tones_played(ToneKind::Click);

    // Act
    harness.session.dispatch(PlayerAction::AnswerRiddle {
        riddle: 0,
        value: "  PiAnO ".to_owned(),
    });

    // Assert
    assert!(harness.session.view().jigsaw.riddles[0].revealed);
    assert_eq!(harness.audio.tones_played(ToneKind::Click), clicks + 1);
}

#[test]
fn test_reveal_is_one_way() {
    let mut harness = common::start();
    harness.go_to("p3-game");
    harness.session.dispatch(PlayerAction::AnswerRiddle {
        riddle: 1,
        value: "footsteps".to_owned(),
    });

    harness.session.dispatch(PlayerAction::AnswerRiddle {
        riddle: 1,
        value: "footstep".to_owned(),
    });

    assert!(harness.session.view().jigsaw.riddles[1].revealed);
    assert_eq!(harness.session.journal().count_of("jigsaw.piece_revealed"), 1);
}

#[test]
fn test_identity_placement_unlocks_ring_three() {
    // Arrange
    let mut harness = common::start();
    harness.go_to("p3-game");
    harness.reveal_all();
    for (piece, slot) in [("0", 0), ("1", 1), ("2", 2)] {
        assert_eq!(harness.session.dispatch(drop_piece(piece, slot)), ActionOutcome::Accepted);
    }

    // Act
    let outcome = harness.session.dispatch(drop_piece("3", 3));

    // Assert
    assert_eq!(
        outcome,
        ActionOutcome::RingUnlocked {
            ring: RingIndex::THIRD
        }
    );
    assert!(harness.session.view().jigsaw.solved);
}

#[test]
fn test_full_permutation_does_not_unlock() {
    let mut harness = common::start();
    harness.go_to("p3-game");
    harness.reveal_all();

    for (piece, slot) in [("1", 0), ("0", 1), ("2", 2), ("3", 3)] {
        harness.session.dispatch(drop_piece(piece, slot));
    }

    assert_eq!(harness.rings_unlocked(), 0);
    assert!(!harness.session.view().jigsaw.solved);
}

#[test]
fn test_rejected_drops_change_nothing() {
    // Arrange
    let mut harness = common::start();
    harness.go_to("p3-game");
    harness.session.dispatch(PlayerAction::AnswerRiddle {
        riddle: 0,
        value: "piano".to_owned(),
    });
    harness.session.dispatch(PlayerAction::AnswerRiddle {
        riddle: 1,
        value: "footsteps".to_owned(),
    });
    harness.session.dispatch(drop_piece("0", 0));
    let before = harness.session.view().journal_len;

    // Act
    let outcomes = [
        // Already placed; the first placement is final.
        harness.session.dispatch(drop_piece("0", 1)),
        // Occupied slot.
        harness.session.dispatch(drop_piece("1", 0)),
        // Still hidden.
        harness.session.dispatch(drop_piece("2", 2)),
        // Malformed and out-of-range payloads.
        harness.session.dispatch(drop_piece("left", 1)),
        harness.session.dispatch(drop_piece("7", 1)),
        harness.session.dispatch(drop_piece("1", 9)),
        harness.session.dispatch(PlayerAction::DropPiece {
            payload: None,
            slot: 1,
        }),
    ];

    // Assert
    for outcome in outcomes {
        assert!(matches!(outcome, ActionOutcome::Ignored { .. }), "{outcome:?}");
    }
    assert_eq!(harness.session.view().journal_len, before);
}

// --- Date ---

#[test]
fn test_accepted_dates_unlock_ring_four_and_reach_the_finale() {
    for value in ["03/07", "0307", " 03 / 07 "] {
        // Arrange
        let mut harness = common::start();
        harness.go_to("p4-game");

        // Act
        let outcome = harness.session.dispatch(check_date(value));

        // Assert
        assert_eq!(
            outcome,
            ActionOutcome::RingUnlocked {
                ring: RingIndex::FOURTH
            },
            "input {value:?}"
        );
        harness.advance(2500);
        harness.advance(300);
        assert_eq!(harness.active_panel().as_deref(), Some("finale"));
    }
}

#[test]
fn test_rejected_date_flashes_alert_for_half_a_second() {
    let mut harness = common::start();
    harness.go_to("p4-game");

    for value in ["3/7", "March 7"] {
        let outcome = harness.session.dispatch(check_date(value));
        assert_eq!(outcome, ActionOutcome::DateRejected);
    }

    let view = harness.session.view();
    assert_eq!(serde_json::to_value(view.date.feedback).unwrap(), "alert");
    assert_eq!(view.date.failed_attempts, 2);

    assert_eq!(harness.advance(500), 2);
    let view = harness.session.view();
    assert_eq!(serde_json::to_value(view.date.feedback).unwrap(), "normal");
    assert_eq!(harness.rings_unlocked(), 0);
}

#[test]
fn test_confirmed_date_ignores_further_checks() {
    let mut harness = common::start();
    harness.go_to("p4-game");
    harness.session.dispatch(check_date("0307"));

    let outcome = harness.session.dispatch(check_date("0307"));

    assert!(matches!(outcome, ActionOutcome::Ignored { .. }));
    assert_eq!(harness.rings_unlocked(), 1);
}

// --- Affirmation ---

#[test]
fn test_affirmation_is_never_gated() {
    let mut harness = common::start();

    let first = harness.session.dispatch(PlayerAction::Affirm);
    let second = harness.session.dispatch(PlayerAction::Affirm);

    for outcome in [first, second] {
        assert_eq!(
            outcome,
            ActionOutcome::Affirmation {
                message: "❤️ Forever. ❤️".to_owned()
            }
        );
    }
    assert_eq!(harness.audio.tones_played(ToneKind::Solve), 2);
}
