//! Domain events for the date-confirmation puzzle.

use ringlock_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

/// Emitted when the entered date is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateConfirmed {
    /// Input with whitespace stripped.
    pub normalized: String,
}

/// Emitted when the entered date is wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRejected {
    /// Input with whitespace stripped.
    pub normalized: String,
    /// One-based count of rejected attempts so far.
    pub attempt: u32,
}

/// Emitted when the alert color on the input fades back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCleared;

/// Event payload variants for the date-confirmation puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DateEventKind {
    /// The date was accepted.
    DateConfirmed(DateConfirmed),
    /// The date was rejected.
    DateRejected(DateRejected),
    /// The alert color was cleared.
    FeedbackCleared(FeedbackCleared),
}

impl DateEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DateConfirmed(_) => "date.confirmed",
            Self::DateRejected(_) => "date.rejected",
            Self::FeedbackCleared(_) => "date.feedback_cleared",
        }
    }
}

/// Domain event envelope for the date-confirmation puzzle.
#[derive(Debug, Clone)]
pub struct DateEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: DateEventKind,
}

impl DomainEvent for DateEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("DateEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
