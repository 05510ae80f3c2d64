//! Aggregate root for the argument-sorting puzzle.

use ringlock_core::aggregate::AggregateRoot;
use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::event::EventMetadata;
use ringlock_core::rng::{DeterministicRng, shuffle};
use uuid::Uuid;

use super::arguments::{ARGUMENTS, Argument, ArgumentId, DECK_SIZE, Stance, Zone, argument};
use super::events::{CardMoved, DebateEvent, DebateEventKind, DeckShuffled, SortSolved};

/// Banes needed in the right-hand zone.
pub const BANES_TO_WIN: usize = 3;

/// What a card move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Not enough banes on the right yet.
    Sorting {
        /// Banes currently in the right-hand zone.
        right_banes: usize,
    },
    /// The move completed the puzzle.
    Solved {
        /// Banes in the right-hand zone.
        right_banes: usize,
    },
}

/// The aggregate root for the debate board.
#[derive(Debug)]
pub struct ArgumentSort {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// Presentation order of the cards.
    pub(crate) order: Vec<ArgumentId>,
    /// Zone of each card by id; `None` while still in the stack.
    pub(crate) placements: [Option<Zone>; DECK_SIZE],
    /// Set once enough banes are on the right.
    pub(crate) solved: bool,
    /// Events not yet committed to the journal.
    uncommitted_events: Vec<DebateEvent>,
}

impl ArgumentSort {
    /// Creates a board with the deck in canonical order and every card
    /// unplaced.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            order: ARGUMENTS.iter().map(|a| a.id).collect(),
            placements: [None; DECK_SIZE],
            solved: false,
            uncommitted_events: Vec::new(),
        }
    }

    /// Cards in presentation order.
    pub fn deck(&self) -> impl Iterator<Item = &'static Argument> + '_ {
        self.order.iter().map(|id| argument(*id))
    }

    /// Zone of a card; `None` while unplaced.
    #[must_use]
    pub fn placement(&self, card: ArgumentId) -> Option<Zone> {
        self.placements[card.index()]
    }

    /// Returns `true` once the puzzle is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Counts cards of `stance` currently in `zone`.
    #[must_use]
    pub fn count_in(&self, zone: Zone, stance: Stance) -> usize {
        ARGUMENTS
            .iter()
            .filter(|a| a.stance == stance && self.placements[a.id.index()] == Some(zone))
            .count()
    }

    /// Deals the deck in a random order. Only allowed before any card moves.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` once a card has been placed.
    pub fn shuffle(
        &mut self,
        rng: &mut dyn DeterministicRng,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if self.solved || self.placements.iter().any(Option::is_some) {
            return Err(DomainError::Validation(
                "deck can only be shuffled before play starts".to_owned(),
            ));
        }
        let mut order = self.order.clone();
        shuffle(&mut order, rng);
        self.record(
            DebateEventKind::DeckShuffled(DeckShuffled { order }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Drops `card` into `zone` and recounts the banes on the right.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` once the puzzle is solved.
    pub fn move_card(
        &mut self,
        card: ArgumentId,
        zone: Zone,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<SortOutcome, DomainError> {
        if self.solved {
            return Err(DomainError::Validation(
                "argument sort is already solved".to_owned(),
            ));
        }

        self.record(
            DebateEventKind::CardMoved(CardMoved { card, zone }),
            correlation_id,
            clock,
        );

        let right_banes = self.count_in(Zone::Right, Stance::Bane);
        if right_banes >= BANES_TO_WIN {
            self.record(
                DebateEventKind::SortSolved(SortSolved {
                    bane_count: right_banes,
                }),
                correlation_id,
                clock,
            );
            return Ok(SortOutcome::Solved { right_banes });
        }
        Ok(SortOutcome::Sorting { right_banes })
    }

    fn record(&mut self, kind: DebateEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = DebateEvent {
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

impl AggregateRoot for ArgumentSort {
    type Event = DebateEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            DebateEventKind::DeckShuffled(payload) => self.order.clone_from(&payload.order),
            DebateEventKind::CardMoved(payload) => {
                self.placements[payload.card.index()] = Some(payload.zone);
            }
            DebateEventKind::SortSolved(_) => self.solved = true,
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

#[cfg(test)]
mod tests {
    use super::*;
    use ringlock_test_support::{FixedClock, MockRng, SequenceRng, valentine_morning};

    fn clock() -> FixedClock {
        FixedClock(valentine_morning())
    }

    fn id(raw: u8) -> ArgumentId {
        ArgumentId::new(raw).unwrap()
    }

    // Canonical banes are ids 1, 3 and 4; boons are 0, 2 and 5.

    #[test]
    fn test_shuffle_records_presentation_order() {
        // Arrange
        let mut board = ArgumentSort::new(Uuid::new_v4());
        // Every draw is 0, so each pass swaps position i with the front.
        let mut rng = SequenceRng::new(vec![0, 0, 0, 0, 0]);

        // Act
        board.shuffle(&mut rng, Uuid::new_v4(), &clock()).unwrap();

        // Assert
        let order: Vec<u8> = board.deck().map(|a| a.id.get()).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 0]);
        assert_eq!(board.version(), 1);
    }

    #[test]
    fn test_shuffle_after_play_starts_is_rejected() {
        let mut board = ArgumentSort::new(Uuid::new_v4());
        board
            .move_card(id(0), Zone::Left, Uuid::new_v4(), &clock())
            .unwrap();

        let result = board.shuffle(&mut MockRng, Uuid::new_v4(), &clock());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_three_banes_on_the_right_solve() {
        // Arrange
        let mut board = ArgumentSort::new(Uuid::new_v4());
        let clock = clock();
        board.move_card(id(1), Zone::Right, Uuid::new_v4(), &clock).unwrap();
        board.move_card(id(3), Zone::Right, Uuid::new_v4(), &clock).unwrap();

        // Act
        let outcome = board.move_card(id(4), Zone::Right, Uuid::new_v4(), &clock).unwrap();

        // Assert
        assert_eq!(outcome, SortOutcome::Solved { right_banes: 3 });
        assert!(board.is_solved());
    }

    #[test]
    fn test_two_banes_and_boons_on_the_right_do_not_solve() {
        let mut board = ArgumentSort::new(Uuid::new_v4());
        let clock = clock();
        for raw in [0, 1, 2, 3, 5] {
            board.move_card(id(raw), Zone::Right, Uuid::new_v4(), &clock).unwrap();
        }

        assert!(!board.is_solved());
        assert_eq!(board.count_in(Zone::Right, Stance::Bane), 2);
        assert_eq!(board.count_in(Zone::Right, Stance::Boon), 3);
    }

    #[test]
    fn test_boons_on_the_right_do_not_block_the_win() {
        let mut board = ArgumentSort::new(Uuid::new_v4());
        let clock = clock();
        for raw in [0, 2, 5, 1, 3] {
            board.move_card(id(raw), Zone::Right, Uuid::new_v4(), &clock).unwrap();
        }

        let outcome = board.move_card(id(4), Zone::Right, Uuid::new_v4(), &clock).unwrap();

        assert_eq!(outcome, SortOutcome::Solved { right_banes: 3 });
    }

    #[test]
    fn test_only_latest_zone_counts() {
        // Arrange
        let mut board = ArgumentSort::new(Uuid::new_v4());
        let clock = clock();
        board.move_card(id(1), Zone::Right, Uuid::new_v4(), &clock).unwrap();
        board.move_card(id(3), Zone::Right, Uuid::new_v4(), &clock).unwrap();
        board.move_card(id(3), Zone::Left, Uuid::new_v4(), &clock).unwrap();

        // Act
        let outcome = board.move_card(id(4), Zone::Right, Uuid::new_v4(), &clock).unwrap();

        // Assert
        assert_eq!(outcome, SortOutcome::Sorting { right_banes: 2 });
        assert_eq!(board.placement(id(3)), Some(Zone::Left));
    }

    #[test]
    fn test_solved_board_rejects_moves() {
        let mut board = ArgumentSort::new(Uuid::new_v4());
        let clock = clock();
        for raw in [1, 3, 4] {
            board.move_card(id(raw), Zone::Right, Uuid::new_v4(), &clock).unwrap();
        }

        let result = board.move_card(id(1), Zone::Left, Uuid::new_v4(), &clock);

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(board.placement(id(1)), Some(Zone::Right));
    }
}
