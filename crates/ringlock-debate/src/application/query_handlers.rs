//! Query handlers for the argument-sorting puzzle.

use serde::Serialize;

use crate::domain::aggregates::ArgumentSort;
use crate::domain::arguments::{ArgumentId, Stance, Zone};

/// Read-only view of one card.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    /// Card identifier.
    pub id: ArgumentId,
    /// Card text.
    pub text: &'static str,
    /// Category tag.
    pub stance: Stance,
    /// Current zone; `None` while still in the stack.
    pub zone: Option<Zone>,
}

/// Read-only view of the debate board.
#[derive(Debug, Clone, Serialize)]
pub struct DebateView {
    /// Cards in presentation order.
    pub cards: Vec<CardView>,
    /// Banes currently in the right-hand zone.
    pub right_banes: usize,
    /// Whether the puzzle is solved.
    pub solved: bool,
}

/// Builds the view of `board`.
#[must_use]
pub fn get_debate(board: &ArgumentSort) -> DebateView {
    DebateView {
        cards: board
            .deck()
            .map(|a| CardView {
                id: a.id,
                text: a.text,
                stance: a.stance,
                zone: board.placement(a.id),
            })
            .collect(),
        right_banes: board.count_in(Zone::Right, Stance::Bane),
        solved: board.solved,
    }
}
