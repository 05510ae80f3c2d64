//! The audio capability consumed by the game.

use std::fmt;

use serde::Serialize;

/// The two cues the game plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneKind {
    /// Short blip for navigation and riddle reveals.
    Click,
    /// Three-note chord for a solved puzzle or an affirmation.
    Solve,
}

/// Glyph shown on the mute toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MuteIndicator {
    /// Sound is on.
    Speaker,
    /// Sound is off.
    Muted,
}

impl fmt::Display for MuteIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Speaker => f.write_str("🔈"),
            Self::Muted => f.write_str("🔇"),
        }
    }
}

/// Abstract audio feedback capability.
///
/// Implementations must never fail loudly: an unavailable device simply
/// means the game continues in silence.
pub trait AudioPort: Send {
    /// Prepares the sound device and attempts to start background music.
    /// Repeated calls after a successful start are no-ops.
    fn init(&mut self);

    /// Plays a cue. Does nothing while muted or before `init`.
    fn play_tone(&mut self, kind: ToneKind);

    /// Flips the mute flag and returns the new value.
    fn toggle_mute(&mut self) -> bool;

    /// Returns `true` while muted.
    fn is_muted(&self) -> bool;

    /// Glyph for the current mute state.
    fn mute_indicator(&self) -> MuteIndicator {
        if self.is_muted() {
            MuteIndicator::Muted
        } else {
            MuteIndicator::Speaker
        }
    }
}
