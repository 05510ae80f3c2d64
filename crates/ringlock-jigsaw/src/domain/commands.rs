//! Commands for the jigsaw puzzle.

use ringlock_core::command::Command;
use uuid::Uuid;

use super::board::{PieceId, SlotIndex};

/// Command carrying the current text of a riddle input.
#[derive(Debug, Clone)]
pub struct AnswerRiddle {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The piece the riddle guards.
    pub piece: PieceId,
    /// Raw input text.
    pub answer: String,
}

impl Command for AnswerRiddle {
    fn command_type(&self) -> &'static str {
        "jigsaw.answer_riddle"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to drop a piece on a slot.
#[derive(Debug, Clone)]
pub struct PlacePiece {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The dragged piece.
    pub piece: PieceId,
    /// The target slot.
    pub slot: SlotIndex,
}

impl Command for PlacePiece {
    fn command_type(&self) -> &'static str {
        "jigsaw.place_piece"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
