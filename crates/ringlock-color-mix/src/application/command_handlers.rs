//! Command handlers for the color-mixing puzzle.

use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::journal::{EventJournal, StoredEvent};

use crate::domain::aggregates::{ColorMix, MixOutcome};
use crate::domain::commands::{AddSample, ResetMix};

/// Result of a handled `AddSample` command.
#[derive(Debug)]
pub struct AddSampleResult {
    /// What the drop did to the mix.
    pub outcome: MixOutcome,
    /// The stored events produced and journaled.
    pub stored_events: Vec<StoredEvent>,
}

/// Handles the `AddSample` command: adds the sample, evaluates the target,
/// and journals the resulting events.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the puzzle is already solved, or a
/// journaling error.
pub fn handle_add_sample(
    command: &AddSample,
    mix: &mut ColorMix,
    clock: &dyn Clock,
    journal: &mut EventJournal,
) -> Result<AddSampleResult, DomainError> {
    let outcome = mix.add_sample(command.sample, command.correlation_id, clock)?;
    let stored_events = journal.commit(mix)?;

    Ok(AddSampleResult {
        outcome,
        stored_events,
    })
}

/// Handles the `ResetMix` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the puzzle is already solved, or a
/// journaling error.
pub fn handle_reset_mix(
    command: &ResetMix,
    mix: &mut ColorMix,
    clock: &dyn Clock,
    journal: &mut EventJournal,
) -> Result<Vec<StoredEvent>, DomainError> {
    mix.reset(command.correlation_id, clock)?;
    journal.commit(mix)
}
