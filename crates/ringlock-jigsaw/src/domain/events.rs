//! Domain events for the jigsaw puzzle.

use ringlock_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::board::{PieceId, SlotIndex};

/// Emitted when a riddle is answered and its piece becomes draggable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceRevealed {
    /// The unveiled piece.
    pub piece: PieceId,
}

/// Emitted when a piece is dropped into an empty slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiecePlaced {
    /// The dropped piece.
    pub piece: PieceId,
    /// The slot it now occupies.
    pub slot: SlotIndex,
}

/// Emitted when every slot holds its own piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JigsawSolved;

/// Event payload variants for the jigsaw puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JigsawEventKind {
    /// A piece was unveiled.
    PieceRevealed(PieceRevealed),
    /// A piece was placed.
    PiecePlaced(PiecePlaced),
    /// The board is complete.
    JigsawSolved(JigsawSolved),
}

impl JigsawEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PieceRevealed(_) => "jigsaw.piece_revealed",
            Self::PiecePlaced(_) => "jigsaw.piece_placed",
            Self::JigsawSolved(_) => "jigsaw.solved",
        }
    }
}

/// Domain event envelope for the jigsaw puzzle.
#[derive(Debug, Clone)]
pub struct JigsawEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: JigsawEventKind,
}

impl DomainEvent for JigsawEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("JigsawEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
