//! Player actions and what the session made of them.

use ringlock_debate::domain::arguments::Zone;
use ringlock_progress::domain::values::{PanelId, RingIndex};
use serde::Serialize;

use crate::story::PuzzleKind;

/// A discrete user interaction, as delivered by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// The next button. Without a target the active panel's `next` is used.
    Next {
        /// Explicit transition target.
        target: Option<PanelId>,
    },
    /// The mute toggle.
    ToggleMute,
    /// A paint blob dropped on the bowl, carrying its `"r,g,b"` payload.
    DropColor {
        /// Drag payload; `None` when the drag carried nothing.
        payload: Option<String>,
    },
    /// The bowl's reset button.
    ResetMix,
    /// An argument card dropped on a zone.
    MoveCard {
        /// Card identifier.
        card: u8,
        /// Drop zone.
        zone: Zone,
    },
    /// The current text of a riddle input.
    AnswerRiddle {
        /// Riddle (and piece) index.
        riddle: u8,
        /// Input text.
        value: String,
    },
    /// A jigsaw piece dropped on a slot, carrying its piece-id payload.
    DropPiece {
        /// Drag payload; `None` when the drag carried nothing.
        payload: Option<String>,
        /// Target slot.
        slot: u8,
    },
    /// The date prompt's check button.
    CheckDate {
        /// Input text.
        value: String,
    },
    /// The closing yes button.
    Affirm,
}

impl PlayerAction {
    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next { .. } => "next",
            Self::ToggleMute => "toggle_mute",
            Self::DropColor { .. } => "drop_color",
            Self::ResetMix => "reset_mix",
            Self::MoveCard { .. } => "move_card",
            Self::AnswerRiddle { .. } => "answer_riddle",
            Self::DropPiece { .. } => "drop_piece",
            Self::CheckDate { .. } => "check_date",
            Self::Affirm => "affirm",
        }
    }

    /// The puzzle whose panel must be on screen for this action to land.
    /// Navigation, sound and the closing answer work anywhere.
    #[must_use]
    pub fn puzzle(&self) -> Option<PuzzleKind> {
        match self {
            Self::DropColor { .. } | Self::ResetMix => Some(PuzzleKind::ColorMix),
            Self::MoveCard { .. } => Some(PuzzleKind::Debate),
            Self::AnswerRiddle { .. } | Self::DropPiece { .. } => Some(PuzzleKind::Jigsaw),
            Self::CheckDate { .. } => Some(PuzzleKind::Date),
            Self::Next { .. } | Self::ToggleMute | Self::Affirm => None,
        }
    }
}

/// The visible result of dispatching a `PlayerAction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The action changed state.
    Accepted,
    /// The action was rejected and changed nothing.
    Ignored {
        /// Why it was rejected.
        reason: String,
    },
    /// The action solved a puzzle and earned a ring.
    RingUnlocked {
        /// The ring earned.
        ring: RingIndex,
    },
    /// The entered date was wrong.
    DateRejected,
    /// The closing message to show.
    Affirmation {
        /// Message text.
        message: String,
    },
    /// Sound was switched on or off.
    MuteToggled {
        /// New mute state.
        muted: bool,
    },
}

impl ActionOutcome {
    pub(crate) fn ignored(reason: impl Into<String>) -> Self {
        Self::Ignored {
            reason: reason.into(),
        }
    }
}
