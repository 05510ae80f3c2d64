//! Shared helpers for session integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use ringlock_core::clock::Clock;
use ringlock_core::rng::DeterministicRng;
use ringlock_progress::domain::values::PanelId;
use ringlock_session::{GameSession, PlayerAction, StoryConfig};
use ringlock_test_support::{ManualClock, MockRng, RecordingAudio};

/// Answers to the built-in riddles, piece 0 first.
pub const RIDDLE_ANSWERS: [&str; 4] = ["piano", "footsteps", "joke", "phone"];

/// A session wired to a manual clock and a recording audio port.
pub struct Harness {
    pub session: GameSession,
    pub clock: Arc<ManualClock>,
    pub audio: RecordingAudio,
}

/// Starts the built-in story, dealing the deck with `MockRng` (every draw is
/// the lowest allowed, so the order is fixed but not canonical).
pub fn start() -> Harness {
    start_with_rng(&mut MockRng)
}

/// Starts the built-in story, dealing the deck with `rng`.
pub fn start_with_rng(rng: &mut dyn DeterministicRng) -> Harness {
    let clock = Arc::new(ManualClock::default());
    let audio = RecordingAudio::new();
    let session_clock: Arc<dyn Clock> = clock.clone();
    let session = GameSession::new(
        StoryConfig::builtin().unwrap(),
        session_clock,
        rng,
        Box::new(audio.clone()),
    )
    .unwrap();

    Harness {
        session,
        clock,
        audio,
    }
}

impl Harness {
    /// Moves the clock forward and fires whatever became due.
    pub fn advance(&mut self, millis: i64) -> usize {
        self.clock.advance_millis(millis);
        self.session.run_due_tasks()
    }

    /// Id of the panel on screen.
    pub fn active_panel(&self) -> Option<String> {
        self.session
            .view()
            .active_panel
            .map(|panel| panel.id.as_str().to_owned())
    }

    /// Jumps straight to `panel` and lets the fade finish.
    pub fn go_to(&mut self, panel: &str) {
        self.session.dispatch(PlayerAction::Next {
            target: Some(PanelId::from(panel)),
        });
        self.advance(300);
    }

    /// Answers every riddle correctly.
    pub fn reveal_all(&mut self) {
        for (riddle, answer) in (0u8..).zip(RIDDLE_ANSWERS) {
            self.session.dispatch(PlayerAction::AnswerRiddle {
                riddle,
                value: answer.to_owned(),
            });
        }
    }

    /// Number of `progress.ring_unlocked` events journaled.
    pub fn rings_unlocked(&self) -> usize {
        self.session.journal().count_of("progress.ring_unlocked")
    }
}
