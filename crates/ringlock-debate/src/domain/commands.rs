//! Commands for the argument-sorting puzzle.

use ringlock_core::command::Command;
use uuid::Uuid;

use super::arguments::{ArgumentId, Zone};

/// Command to deal the deck in random order.
#[derive(Debug, Clone)]
pub struct ShuffleDeck {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ShuffleDeck {
    fn command_type(&self) -> &'static str {
        "debate.shuffle_deck"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to drop a card into a zone.
#[derive(Debug, Clone)]
pub struct MoveCard {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The dragged card.
    pub card: ArgumentId,
    /// The zone it was dropped on.
    pub zone: Zone,
}

impl Command for MoveCard {
    fn command_type(&self) -> &'static str {
        "debate.move_card"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
