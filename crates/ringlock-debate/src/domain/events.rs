//! Domain events for the argument-sorting puzzle.

use ringlock_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::arguments::{ArgumentId, Zone};

/// Emitted when the deck is dealt in a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckShuffled {
    /// Card order as presented to the player.
    pub order: Vec<ArgumentId>,
}

/// Emitted when a card is dropped into a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardMoved {
    /// The card that moved.
    pub card: ArgumentId,
    /// Where it landed.
    pub zone: Zone,
}

/// Emitted when the right-hand zone holds enough banes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortSolved {
    /// Banes in the right-hand zone at the moment of solving.
    pub bane_count: usize,
}

/// Event payload variants for the argument-sorting puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DebateEventKind {
    /// The deck was shuffled.
    DeckShuffled(DeckShuffled),
    /// A card changed zone.
    CardMoved(CardMoved),
    /// The puzzle was solved.
    SortSolved(SortSolved),
}

impl DebateEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DeckShuffled(_) => "debate.deck_shuffled",
            Self::CardMoved(_) => "debate.card_moved",
            Self::SortSolved(_) => "debate.solved",
        }
    }
}

/// Domain event envelope for the argument-sorting puzzle.
#[derive(Debug, Clone)]
pub struct DebateEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: DebateEventKind,
}

impl DomainEvent for DebateEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("DebateEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
