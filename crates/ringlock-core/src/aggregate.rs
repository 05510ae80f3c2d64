//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for aggregate roots that record the events they produce.
///
/// Ringlock aggregates apply each event as soon as it is recorded, so the
/// in-memory state is always current; `apply` is also usable to replay a
/// journal into a fresh aggregate.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> i64;

    /// Apply an event to mutate internal state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events recorded since the last journal commit.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Clears uncommitted events after they reach the journal.
    fn clear_uncommitted_events(&mut self);
}
