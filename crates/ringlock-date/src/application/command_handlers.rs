//! Command handlers for the date-confirmation puzzle.

use chrono::Duration;
use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::journal::{EventJournal, StoredEvent};
use ringlock_core::schedule::{Scheduler, TaskId};

use crate::domain::aggregates::{DateCheck, DateOutcome};
use crate::domain::commands::{CheckDate, ClearFeedback};

/// How long the input stays in the alert color after a wrong date.
pub const FEEDBACK_REVERT_MS: i64 = 500;

/// Delayed date-prompt work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTask {
    /// Fade the alert color back to normal.
    ClearFeedback,
}

/// Result of a handled `CheckDate` command.
#[derive(Debug)]
pub struct CheckDateResult {
    /// What the check decided.
    pub outcome: DateOutcome,
    /// The stored events produced and journaled.
    pub stored_events: Vec<StoredEvent>,
    /// The feedback revert queued after a rejection.
    pub scheduled: Option<TaskId>,
}

/// Handles the `CheckDate` command. A wrong date flashes the input and
/// queues its own revert; earlier reverts stay queued.
///
/// # Errors
///
/// Returns `DomainError::Validation` once the date is confirmed, or a
/// journaling error.
pub fn handle_check_date(
    command: &CheckDate,
    prompt: &mut DateCheck,
    clock: &dyn Clock,
    journal: &mut EventJournal,
    scheduler: &mut Scheduler<DateTask>,
) -> Result<CheckDateResult, DomainError> {
    let outcome = prompt.check(&command.input, command.correlation_id, clock)?;
    let stored_events = journal.commit(prompt)?;

    let scheduled = match outcome {
        DateOutcome::Confirmed => None,
        DateOutcome::Rejected { .. } => Some(scheduler.schedule_after(
            clock,
            Duration::milliseconds(FEEDBACK_REVERT_MS),
            DateTask::ClearFeedback,
        )),
    };

    Ok(CheckDateResult {
        outcome,
        stored_events,
        scheduled,
    })
}

/// Handles the `ClearFeedback` command.
///
/// # Errors
///
/// Returns `DomainError` if journaling fails.
pub fn handle_clear_feedback(
    command: &ClearFeedback,
    prompt: &mut DateCheck,
    clock: &dyn Clock,
    journal: &mut EventJournal,
) -> Result<Vec<StoredEvent>, DomainError> {
    prompt.clear_feedback(command.correlation_id, clock);
    journal.commit(prompt)
}
