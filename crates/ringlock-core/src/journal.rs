//! Session-scoped event journal.
//!
//! Every aggregate commits the events it records to the journal owned by the
//! game session. The journal lives exactly as long as the session and is
//! never written anywhere else.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::aggregate::AggregateRoot;
use crate::error::DomainError;
use crate::event::DomainEvent;

/// Journal representation of a domain event.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Aggregate this event belongs to.
    pub aggregate_id: Uuid,
    /// Event type name.
    pub event_type: String,
    /// Serialized event payload.
    pub payload: serde_json::Value,
    /// Sequence number within the aggregate stream.
    pub sequence_number: i64,
    /// Correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Causation ID linking to the causing command.
    pub causation_id: Uuid,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

impl StoredEvent {
    /// Converts a domain event into its journal representation.
    pub fn from_domain_event<E: DomainEvent>(event: &E) -> Self {
        let meta = event.metadata();
        Self {
            event_id: meta.event_id,
            aggregate_id: meta.aggregate_id,
            event_type: event.event_type().to_owned(),
            payload: event.to_payload(),
            sequence_number: meta.sequence_number,
            correlation_id: meta.correlation_id,
            causation_id: meta.causation_id,
            occurred_at: meta.occurred_at,
        }
    }
}

/// Append-only, in-memory log of every event recorded during a session.
#[derive(Debug, Default)]
pub struct EventJournal {
    events: Vec<StoredEvent>,
}

impl EventJournal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append events to an aggregate stream with optimistic concurrency.
    /// `expected_version` is the last sequence number the caller saw.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConcurrencyConflict` if the stream has moved past
    /// `expected_version`.
    pub fn append_events(
        &mut self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        let actual = self.last_sequence_number(aggregate_id);
        if actual != expected_version {
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id,
                expected: expected_version,
                actual,
            });
        }
        self.events.extend_from_slice(events);
        Ok(())
    }

    /// Moves an aggregate's uncommitted events into the journal and returns
    /// the stored copies.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConcurrencyConflict` if the journal disagrees
    /// with the aggregate about the version the events were recorded on.
    #[allow(clippy::cast_possible_wrap)]
    pub fn commit<A: AggregateRoot>(
        &mut self,
        aggregate: &mut A,
    ) -> Result<Vec<StoredEvent>, DomainError> {
        let pending = aggregate.uncommitted_events();
        if pending.is_empty() {
            return Ok(Vec::new());
        }
        let expected_version = aggregate.version() - pending.len() as i64;
        let stored: Vec<StoredEvent> = pending.iter().map(StoredEvent::from_domain_event).collect();

        self.append_events(aggregate.aggregate_id(), expected_version, &stored)?;
        aggregate.clear_uncommitted_events();

        Ok(stored)
    }

    /// Returns every event in the order it was appended.
    #[must_use]
    pub fn events(&self) -> &[StoredEvent] {
        &self.events
    }

    /// Returns the events of a single aggregate stream, ordered by sequence.
    #[must_use]
    pub fn load_events(&self, aggregate_id: Uuid) -> Vec<StoredEvent> {
        self.events
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }

    /// Counts events of the given type across all streams.
    #[must_use]
    pub fn count_of(&self, event_type: &str) -> usize {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }

    /// Number of events in the journal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been journaled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn last_sequence_number(&self, aggregate_id: Uuid) -> i64 {
        self.events
            .iter()
            .rev()
            .find(|e| e.aggregate_id == aggregate_id)
            .map_or(0, |e| e.sequence_number)
    }
}
