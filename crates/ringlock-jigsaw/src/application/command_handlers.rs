//! Command handlers for the jigsaw puzzle.

use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::journal::{EventJournal, StoredEvent};

use crate::domain::aggregates::{Jigsaw, PlacementOutcome, RevealOutcome};
use crate::domain::commands::{AnswerRiddle, PlacePiece};

/// Result of a handled `AnswerRiddle` command.
#[derive(Debug)]
pub struct AnswerRiddleResult {
    /// What the input did.
    pub outcome: RevealOutcome,
    /// The stored events produced and journaled.
    pub stored_events: Vec<StoredEvent>,
}

/// Result of a handled `PlacePiece` command.
#[derive(Debug)]
pub struct PlacePieceResult {
    /// What the drop did.
    pub outcome: PlacementOutcome,
    /// The stored events produced and journaled.
    pub stored_events: Vec<StoredEvent>,
}

/// Handles the `AnswerRiddle` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the board is complete, or a
/// journaling error.
pub fn handle_answer_riddle(
    command: &AnswerRiddle,
    board: &mut Jigsaw,
    clock: &dyn Clock,
    journal: &mut EventJournal,
) -> Result<AnswerRiddleResult, DomainError> {
    let outcome = board.answer_riddle(command.piece, &command.answer, command.correlation_id, clock)?;
    let stored_events = journal.commit(board)?;

    Ok(AnswerRiddleResult {
        outcome,
        stored_events,
    })
}

/// Handles the `PlacePiece` command: places the piece, checks the board,
/// and journals the resulting events.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a rejected drop, or a journaling
/// error.
pub fn handle_place_piece(
    command: &PlacePiece,
    board: &mut Jigsaw,
    clock: &dyn Clock,
    journal: &mut EventJournal,
) -> Result<PlacePieceResult, DomainError> {
    let outcome = board.place_piece(command.piece, command.slot, command.correlation_id, clock)?;
    let stored_events = journal.commit(board)?;

    Ok(PlacePieceResult {
        outcome,
        stored_events,
    })
}
