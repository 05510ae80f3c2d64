//! Domain events for panel progression.

use ringlock_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::values::{PanelId, RingIndex};

/// Emitted when the active panel is taken off screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelDeactivated {
    /// The panel that was active.
    pub panel: PanelId,
}

/// Emitted when a panel becomes the active one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelActivated {
    /// The newly active panel.
    pub panel: PanelId,
}

/// Emitted the first time a ring is earned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingUnlocked {
    /// The ring that was earned.
    pub ring: RingIndex,
}

/// Event payload variants for panel progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProgressEventKind {
    /// The active panel was cleared.
    PanelDeactivated(PanelDeactivated),
    /// A panel became active.
    PanelActivated(PanelActivated),
    /// A ring was unlocked.
    RingUnlocked(RingUnlocked),
}

impl ProgressEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PanelDeactivated(_) => "progress.panel_deactivated",
            Self::PanelActivated(_) => "progress.panel_activated",
            Self::RingUnlocked(_) => "progress.ring_unlocked",
        }
    }
}

/// Domain event envelope for panel progression.
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: ProgressEventKind,
}

impl DomainEvent for ProgressEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("ProgressEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
