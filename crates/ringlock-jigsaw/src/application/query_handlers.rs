//! Query handlers for the jigsaw puzzle.

use serde::Serialize;

use crate::domain::aggregates::Jigsaw;
use crate::domain::board::{PieceId, SlotIndex};

/// Read-only view of one riddle card.
#[derive(Debug, Clone, Serialize)]
pub struct RiddleView {
    /// The piece behind the riddle.
    pub piece: PieceId,
    /// Question text.
    pub prompt: String,
    /// Whether the piece is unveiled.
    pub revealed: bool,
    /// Slot the piece sits in, once placed.
    pub placed_in: Option<SlotIndex>,
}

/// Read-only view of the jigsaw board.
#[derive(Debug, Clone, Serialize)]
pub struct JigsawView {
    /// Riddle cards, piece 0 first.
    pub riddles: Vec<RiddleView>,
    /// Occupant of each slot, slot 0 first.
    pub slots: Vec<Option<PieceId>>,
    /// Whether the board is complete.
    pub solved: bool,
}

/// Builds the view of `board`.
#[must_use]
pub fn get_jigsaw(board: &Jigsaw) -> JigsawView {
    let riddles = SlotIndex::all()
        .into_iter()
        .map(SlotIndex::home_piece)
        .map(|piece| RiddleView {
            piece,
            prompt: board.riddle(piece).prompt.clone(),
            revealed: board.is_revealed(piece),
            placed_in: board.slot_of(piece),
        })
        .collect();

    JigsawView {
        riddles,
        slots: board.slots.to_vec(),
        solved: board.solved,
    }
}
