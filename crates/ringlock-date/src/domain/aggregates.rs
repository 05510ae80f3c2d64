//! Aggregate root for the date-confirmation puzzle.

use ringlock_core::aggregate::AggregateRoot;
use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::event::EventMetadata;
use serde::Serialize;
use uuid::Uuid;

use super::events::{DateConfirmed, DateEvent, DateEventKind, DateRejected, FeedbackCleared};

/// The two accepted spellings of the date.
pub const ACCEPTED_DATES: [&str; 2] = ["03/07", "0307"];

/// Text color of the date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFeedback {
    /// Regular ink.
    Normal,
    /// Flashed after a wrong answer.
    Alert,
}

/// Result of pressing the check button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    /// The date is right.
    Confirmed,
    /// The date is wrong; the input flashes.
    Rejected {
        /// One-based count of rejected attempts so far.
        attempt: u32,
    },
}

/// Removes every whitespace character. No other normalization happens.
#[must_use]
pub fn normalize_date(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The aggregate root for the date prompt.
#[derive(Debug)]
pub struct DateCheck {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// Set once the date is confirmed.
    pub(crate) solved: bool,
    /// Current input color.
    pub(crate) feedback: InputFeedback,
    /// Wrong answers so far.
    pub(crate) failed_attempts: u32,
    /// Events not yet committed to the journal.
    uncommitted_events: Vec<DateEvent>,
}

impl DateCheck {
    /// Creates an unsolved prompt.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            solved: false,
            feedback: InputFeedback::Normal,
            failed_attempts: 0,
            uncommitted_events: Vec::new(),
        }
    }

    /// Returns `true` once the date is confirmed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Current input color.
    #[must_use]
    pub fn feedback(&self) -> InputFeedback {
        self.feedback
    }

    /// Checks the entered date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` once the date is confirmed.
    pub fn check(
        &mut self,
        input: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<DateOutcome, DomainError> {
        if self.solved {
            return Err(DomainError::Validation("date is already confirmed".to_owned()));
        }

        let normalized = normalize_date(input);
        if ACCEPTED_DATES.contains(&normalized.as_str()) {
            self.record(
                DateEventKind::DateConfirmed(DateConfirmed { normalized }),
                correlation_id,
                clock,
            );
            return Ok(DateOutcome::Confirmed);
        }

        let attempt = self.failed_attempts + 1;
        self.record(
            DateEventKind::DateRejected(DateRejected {
                normalized,
                attempt,
            }),
            correlation_id,
            clock,
        );
        Ok(DateOutcome::Rejected { attempt })
    }

    /// Returns the input to its regular color. Returns `false` if it already
    /// was.
    pub fn clear_feedback(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> bool {
        if self.feedback == InputFeedback::Normal {
            return false;
        }
        self.record(
            DateEventKind::FeedbackCleared(FeedbackCleared),
            correlation_id,
            clock,
        );
        true
    }

    fn record(&mut self, kind: DateEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = DateEvent {
            metadata: EventMetadata::record(
                kind.event_type(),
                self.id,
                self.version + 1,
                correlation_id,
                clock,
            ),
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

impl AggregateRoot for DateCheck {
    type Event = DateEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            DateEventKind::DateConfirmed(_) => self.solved = true,
            DateEventKind::DateRejected(payload) => {
                self.failed_attempts = payload.attempt;
                self.feedback = InputFeedback::Alert;
            }
            DateEventKind::FeedbackCleared(_) => self.feedback = InputFeedback::Normal,
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
