//! Command handlers for panel progression.
//!
//! Each handler executes a command against the `Progression` aggregate,
//! commits the recorded events to the session journal, and queues any
//! delayed follow-up on the progression scheduler.

use chrono::Duration;
use ringlock_audio::{AudioPort, ToneKind};
use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::journal::{EventJournal, StoredEvent};
use ringlock_core::schedule::{Scheduler, TaskId};
use tracing::debug;
use uuid::Uuid;

use crate::domain::aggregates::Progression;
use crate::domain::commands::{ActivatePanel, TransitionTo, UnlockRing};
use crate::domain::values::{PanelId, RingState};

/// Fade between deactivating one panel and activating the next.
pub const PANEL_FADE_MS: i64 = 300;

/// Pause between unlocking a ring and leaving the puzzle panel.
pub const RING_CELEBRATION_MS: i64 = 2500;

/// Delayed progression work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressTask {
    /// Finish a transition by showing the panel.
    ActivatePanel(PanelId),
    /// Start a transition after a ring celebration.
    TransitionTo(PanelId),
}

/// Result of a successfully handled command.
#[derive(Debug, Default)]
pub struct ProgressCommandResult {
    /// The stored events produced and journaled.
    pub stored_events: Vec<StoredEvent>,
    /// Follow-up task queued by the command, if any.
    pub scheduled: Option<TaskId>,
}

/// Handles the `TransitionTo` command: deactivates the current panel and
/// schedules activation of the target after the fade.
///
/// # Errors
///
/// Returns `DomainError` if journaling fails.
pub fn handle_transition_to(
    command: &TransitionTo,
    progression: &mut Progression,
    clock: &dyn Clock,
    journal: &mut EventJournal,
    scheduler: &mut Scheduler<ProgressTask>,
) -> Result<ProgressCommandResult, DomainError> {
    progression.deactivate_current(command.correlation_id, clock);
    let stored_events = journal.commit(progression)?;

    let scheduled = scheduler.schedule_after(
        clock,
        Duration::milliseconds(PANEL_FADE_MS),
        ProgressTask::ActivatePanel(command.target.clone()),
    );

    Ok(ProgressCommandResult {
        stored_events,
        scheduled: Some(scheduled),
    })
}

/// Handles the `ActivatePanel` command. An unknown target leaves the screen
/// as it is.
///
/// # Errors
///
/// Returns `DomainError` if journaling fails.
pub fn handle_activate_panel(
    command: &ActivatePanel,
    progression: &mut Progression,
    clock: &dyn Clock,
    journal: &mut EventJournal,
) -> Result<ProgressCommandResult, DomainError> {
    if !progression.activate(&command.target, command.correlation_id, clock) {
        debug!(target_panel = %command.target, "transition target does not exist");
    }
    let stored_events = journal.commit(progression)?;

    Ok(ProgressCommandResult {
        stored_events,
        scheduled: None,
    })
}

/// Handles the `UnlockRing` command: plays the solve cue, marks the ring,
/// and schedules the transition to the next panel. A ring that is already
/// unlocked produces no sound, no event and no transition.
///
/// # Errors
///
/// Returns `DomainError` if journaling fails.
pub fn handle_unlock_ring(
    command: &UnlockRing,
    progression: &mut Progression,
    audio: &mut dyn AudioPort,
    clock: &dyn Clock,
    journal: &mut EventJournal,
    scheduler: &mut Scheduler<ProgressTask>,
) -> Result<ProgressCommandResult, DomainError> {
    if progression.ring_state(command.ring) == RingState::Unlocked {
        debug!(ring = %command.ring, "ring already unlocked");
        return Ok(ProgressCommandResult::default());
    }

    audio.play_tone(ToneKind::Solve);
    progression.unlock_ring(command.ring, command.correlation_id, clock);
    let stored_events = journal.commit(progression)?;

    let scheduled = scheduler.schedule_after(
        clock,
        Duration::milliseconds(RING_CELEBRATION_MS),
        ProgressTask::TransitionTo(command.next_panel.clone()),
    );

    Ok(ProgressCommandResult {
        stored_events,
        scheduled: Some(scheduled),
    })
}

/// Runs a task popped from the progression scheduler.
///
/// # Errors
///
/// Returns `DomainError` if journaling fails.
pub fn handle_due_task(
    task: ProgressTask,
    correlation_id: Uuid,
    progression: &mut Progression,
    clock: &dyn Clock,
    journal: &mut EventJournal,
    scheduler: &mut Scheduler<ProgressTask>,
) -> Result<ProgressCommandResult, DomainError> {
    match task {
        ProgressTask::ActivatePanel(target) => handle_activate_panel(
            &ActivatePanel {
                correlation_id,
                target,
            },
            progression,
            clock,
            journal,
        ),
        ProgressTask::TransitionTo(target) => handle_transition_to(
            &TransitionTo {
                correlation_id,
                target,
            },
            progression,
            clock,
            journal,
            scheduler,
        ),
    }
}
