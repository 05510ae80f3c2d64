//! Command handlers for the argument-sorting puzzle.

use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::journal::{EventJournal, StoredEvent};
use ringlock_core::rng::DeterministicRng;

use crate::domain::aggregates::{ArgumentSort, SortOutcome};
use crate::domain::commands::{MoveCard, ShuffleDeck};

/// Result of a handled `MoveCard` command.
#[derive(Debug)]
pub struct MoveCardResult {
    /// What the move did.
    pub outcome: SortOutcome,
    /// The stored events produced and journaled.
    pub stored_events: Vec<StoredEvent>,
}

/// Handles the `ShuffleDeck` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if play has started, or a journaling
/// error.
pub fn handle_shuffle_deck(
    command: &ShuffleDeck,
    board: &mut ArgumentSort,
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
    journal: &mut EventJournal,
) -> Result<Vec<StoredEvent>, DomainError> {
    board.shuffle(rng, command.correlation_id, clock)?;
    journal.commit(board)
}

/// Handles the `MoveCard` command: moves the card, recounts the banes, and
/// journals the resulting events.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the puzzle is solved, or a
/// journaling error.
pub fn handle_move_card(
    command: &MoveCard,
    board: &mut ArgumentSort,
    clock: &dyn Clock,
    journal: &mut EventJournal,
) -> Result<MoveCardResult, DomainError> {
    let outcome = board.move_card(command.card, command.zone, command.correlation_id, clock)?;
    let stored_events = journal.commit(board)?;

    Ok(MoveCardResult {
        outcome,
        stored_events,
    })
}
