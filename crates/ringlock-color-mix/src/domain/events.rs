//! Domain events for the color-mixing puzzle.

use ringlock_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::color::ColorSample;

/// Emitted when a paint sample lands in the bowl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleAdded {
    /// The sample that was dropped.
    pub sample: ColorSample,
}

/// Emitted when the bowl is emptied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixReset {
    /// How many samples were thrown away.
    pub discarded: usize,
}

/// Emitted when the averaged color reaches the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixSolved {
    /// The winning average.
    pub mean: ColorSample,
}

/// Event payload variants for the color-mixing puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColorMixEventKind {
    /// A sample was added.
    SampleAdded(SampleAdded),
    /// The mix was reset.
    MixReset(MixReset),
    /// The target color was reached.
    MixSolved(MixSolved),
}

impl ColorMixEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SampleAdded(_) => "color_mix.sample_added",
            Self::MixReset(_) => "color_mix.reset",
            Self::MixSolved(_) => "color_mix.solved",
        }
    }
}

/// Domain event envelope for the color-mixing puzzle.
#[derive(Debug, Clone)]
pub struct ColorMixEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: ColorMixEventKind,
}

impl DomainEvent for ColorMixEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("ColorMixEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
