//! Aggregate root for the jigsaw puzzle.

use ringlock_core::aggregate::AggregateRoot;
use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::event::EventMetadata;
use uuid::Uuid;

use super::board::{PIECE_COUNT, PieceId, Riddle, SlotIndex};
use super::events::{JigsawEvent, JigsawEventKind, JigsawSolved, PiecePlaced, PieceRevealed};

/// What typing into a riddle input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The answer matched and the piece is now draggable.
    Revealed,
    /// The piece was already revealed; input no longer matters.
    AlreadyRevealed,
    /// The text does not match the answer.
    NoMatch,
}

/// What a successful drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The piece is placed; the board is not complete.
    Placed {
        /// Slots now occupied.
        filled: usize,
    },
    /// Every slot holds its own piece.
    Solved,
}

/// The aggregate root for the jigsaw board.
#[derive(Debug)]
pub struct Jigsaw {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// Riddle guarding each piece, by piece id.
    pub(crate) riddles: [Riddle; PIECE_COUNT],
    /// Whether each piece has been unveiled, by piece id.
    pub(crate) revealed: [bool; PIECE_COUNT],
    /// Occupant of each slot, by slot index.
    pub(crate) slots: [Option<PieceId>; PIECE_COUNT],
    /// Set once the board is complete.
    pub(crate) solved: bool,
    /// Events not yet committed to the journal.
    uncommitted_events: Vec<JigsawEvent>,
}

impl Jigsaw {
    /// Creates a board with every piece hidden behind its riddle.
    #[must_use]
    pub fn new(id: Uuid, riddles: [Riddle; PIECE_COUNT]) -> Self {
        Self {
            id,
            version: 0,
            riddles,
            revealed: [false; PIECE_COUNT],
            slots: [None; PIECE_COUNT],
            solved: false,
            uncommitted_events: Vec::new(),
        }
    }

    /// The riddle guarding `piece`.
    #[must_use]
    pub fn riddle(&self, piece: PieceId) -> &Riddle {
        &self.riddles[piece.index()]
    }

    /// Returns `true` if `piece` can be dragged.
    #[must_use]
    pub fn is_revealed(&self, piece: PieceId) -> bool {
        self.revealed[piece.index()]
    }

    /// The piece in `slot`, if any.
    #[must_use]
    pub fn occupant(&self, slot: SlotIndex) -> Option<PieceId> {
        self.slots[slot.index()]
    }

    /// The slot holding `piece`, if it has been placed.
    #[must_use]
    pub fn slot_of(&self, piece: PieceId) -> Option<SlotIndex> {
        SlotIndex::all()
            .into_iter()
            .find(|slot| self.slots[slot.index()] == Some(piece))
    }

    /// Returns `true` once the board is complete.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Checks riddle input for `piece`. A match reveals the piece for good;
    /// editing the input afterwards changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` once the board is complete.
    pub fn answer_riddle(
        &mut self,
        piece: PieceId,
        input: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<RevealOutcome, DomainError> {
        self.ensure_open()?;

        if self.is_revealed(piece) {
            return Ok(RevealOutcome::AlreadyRevealed);
        }
        if !self.riddle(piece).accepts(input) {
            return Ok(RevealOutcome::NoMatch);
        }

        self.record(
            JigsawEventKind::PieceRevealed(PieceRevealed { piece }),
            correlation_id,
            clock,
        );
        Ok(RevealOutcome::Revealed)
    }

    /// Drops a revealed piece on an empty slot. A placed piece stays where
    /// it first landed and an occupant is never evicted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the board is complete, the piece
    /// is hidden or already placed, or the slot is occupied.
    pub fn place_piece(
        &mut self,
        piece: PieceId,
        slot: SlotIndex,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<PlacementOutcome, DomainError> {
        self.ensure_open()?;

        if !self.is_revealed(piece) {
            return Err(DomainError::Validation(format!(
                "piece {piece} is still hidden"
            )));
        }
        if let Some(current) = self.slot_of(piece) {
            return Err(DomainError::Validation(format!(
                "piece {piece} is already placed in slot {current}"
            )));
        }
        if self.occupant(slot).is_some() {
            return Err(DomainError::Validation(format!("slot {slot} is occupied")));
        }

        self.record(
            JigsawEventKind::PiecePlaced(PiecePlaced { piece, slot }),
            correlation_id,
            clock,
        );

        if self.is_assembled() {
            self.record(
                JigsawEventKind::JigsawSolved(JigsawSolved),
                correlation_id,
                clock,
            );
            return Ok(PlacementOutcome::Solved);
        }
        Ok(PlacementOutcome::Placed {
            filled: self.slots.iter().flatten().count(),
        })
    }

    /// Every slot is filled and holds exactly its own piece.
    fn is_assembled(&self) -> bool {
        SlotIndex::all()
            .into_iter()
            .all(|slot| self.occupant(slot) == Some(slot.home_piece()))
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.solved {
            return Err(DomainError::Validation("jigsaw is already solved".to_owned()));
        }
        Ok(())
    }

    fn record(&mut self, kind: JigsawEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = JigsawEvent {
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

impl AggregateRoot for Jigsaw {
    type Event = JigsawEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            JigsawEventKind::PieceRevealed(payload) => {
                self.revealed[payload.piece.index()] = true;
            }
            JigsawEventKind::PiecePlaced(payload) => {
                self.slots[payload.slot.index()] = Some(payload.piece);
            }
            JigsawEventKind::JigsawSolved(_) => self.solved = true,
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
