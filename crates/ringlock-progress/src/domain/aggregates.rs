//! Aggregate root for panel progression.

use ringlock_core::aggregate::AggregateRoot;
use ringlock_core::clock::Clock;
use ringlock_core::event::EventMetadata;
use uuid::Uuid;

use super::events::{
    PanelActivated, PanelDeactivated, ProgressEvent, ProgressEventKind, RingUnlocked,
};
use super::values::{PanelId, RING_COUNT, RingIndex, RingState};

/// Tracks the active panel and the four rings.
#[derive(Debug)]
pub struct Progression {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// Every panel the story defines, in narrative order.
    pub(crate) panels: Vec<PanelId>,
    /// The panel on screen; `None` during a fade.
    pub(crate) active: Option<PanelId>,
    /// Ring states, indexed by `RingIndex::slot`.
    pub(crate) rings: [RingState; RING_COUNT],
    /// Events not yet committed to the journal.
    uncommitted_events: Vec<ProgressEvent>,
}

impl Progression {
    /// Creates a progression over `panels` with the first one active.
    #[must_use]
    pub fn new(id: Uuid, panels: Vec<PanelId>) -> Self {
        let active = panels.first().cloned();
        Self {
            id,
            version: 0,
            panels,
            active,
            rings: [RingState::Locked; RING_COUNT],
            uncommitted_events: Vec::new(),
        }
    }

    /// The panel currently on screen.
    #[must_use]
    pub fn active_panel(&self) -> Option<&PanelId> {
        self.active.as_ref()
    }

    /// State of a single ring.
    #[must_use]
    pub fn ring_state(&self, ring: RingIndex) -> RingState {
        self.rings[ring.slot()]
    }

    /// All ring states, ring 1 first.
    #[must_use]
    pub fn rings(&self) -> &[RingState; RING_COUNT] {
        &self.rings
    }

    /// Returns `true` if the story defines `panel`.
    #[must_use]
    pub fn has_panel(&self, panel: &PanelId) -> bool {
        self.panels.contains(panel)
    }

    /// Takes the active panel off screen. With no active panel nothing is
    /// recorded. Returns the panel that was deactivated.
    pub fn deactivate_current(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Option<PanelId> {
        let panel = self.active.clone()?;
        self.record(
            ProgressEventKind::PanelDeactivated(PanelDeactivated {
                panel: panel.clone(),
            }),
            correlation_id,
            clock,
        );
        Some(panel)
    }

    /// Puts `target` on screen. Unknown panels are ignored; returns whether
    /// the activation happened.
    pub fn activate(&mut self, target: &PanelId, correlation_id: Uuid, clock: &dyn Clock) -> bool {
        if !self.has_panel(target) {
            return false;
        }
        self.record(
            ProgressEventKind::PanelActivated(PanelActivated {
                panel: target.clone(),
            }),
            correlation_id,
            clock,
        );
        true
    }

    /// Marks `ring` unlocked. Returns `false` without recording anything if
    /// it already was.
    pub fn unlock_ring(&mut self, ring: RingIndex, correlation_id: Uuid, clock: &dyn Clock) -> bool {
        if self.ring_state(ring) == RingState::Unlocked {
            return false;
        }
        self.record(
            ProgressEventKind::RingUnlocked(RingUnlocked { ring }),
            correlation_id,
            clock,
        );
        true
    }

    fn record(&mut self, kind: ProgressEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = ProgressEvent {
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

impl AggregateRoot for Progression {
    type Event = ProgressEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            ProgressEventKind::PanelDeactivated(payload) => {
                if self.active.as_ref() == Some(&payload.panel) {
                    self.active = None;
                }
            }
            ProgressEventKind::PanelActivated(payload) => {
                self.active = Some(payload.panel.clone());
            }
            ProgressEventKind::RingUnlocked(payload) => {
                self.rings[payload.ring.slot()] = RingState::Unlocked;
            }
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
    use ringlock_core::event::DomainEvent;
    use ringlock_test_support::{FixedClock, valentine_morning};

    fn panels() -> Vec<PanelId> {
        ["p1-text", "p2-text", "finale"]
            .into_iter()
            .map(PanelId::from)
            .collect()
    }

    #[test]
    fn test_new_progression_starts_on_first_panel_with_rings_locked() {
        let progression = Progression::new(Uuid::new_v4(), panels());

        assert_eq!(progression.active_panel(), Some(&PanelId::from("p1-text")));
        assert!(progression.rings().iter().all(|r| *r == RingState::Locked));
    }

    #[test]
    fn test_deactivate_current_clears_active_panel() {
        // Arrange
        let clock = FixedClock(valentine_morning());
        let mut progression = Progression::new(Uuid::new_v4(), panels());

        // Act
        let left = progression.deactivate_current(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(left, Some(PanelId::from("p1-text")));
        assert!(progression.active_panel().is_none());
        let events = progression.uncommitted_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "progress.panel_deactivated");
        assert_eq!(events[0].metadata().sequence_number, 1);
    }

    #[test]
    fn test_deactivate_with_nothing_active_records_nothing() {
        let clock = FixedClock(valentine_morning());
        let mut progression = Progression::new(Uuid::new_v4(), panels());
        progression.deactivate_current(Uuid::new_v4(), &clock);

        let left = progression.deactivate_current(Uuid::new_v4(), &clock);

        assert!(left.is_none());
        assert_eq!(progression.uncommitted_events().len(), 1);
    }

    #[test]
    fn test_activate_unknown_panel_is_silent_no_op() {
        let clock = FixedClock(valentine_morning());
        let mut progression = Progression::new(Uuid::new_v4(), panels());
        progression.deactivate_current(Uuid::new_v4(), &clock);

        let activated = progression.activate(&PanelId::from("p9-missing"), Uuid::new_v4(), &clock);

        assert!(!activated);
        assert!(progression.active_panel().is_none());
        assert_eq!(progression.version(), 1);
    }

    #[test]
    fn test_activate_known_panel_makes_it_active() {
        let clock = FixedClock(valentine_morning());
        let mut progression = Progression::new(Uuid::new_v4(), panels());
        progression.deactivate_current(Uuid::new_v4(), &clock);

        let activated = progression.activate(&PanelId::from("finale"), Uuid::new_v4(), &clock);

        assert!(activated);
        assert_eq!(progression.active_panel(), Some(&PanelId::from("finale")));
    }

    #[test]
    fn test_unlock_ring_is_idempotent() {
        // Arrange
        let clock = FixedClock(valentine_morning());
        let mut progression = Progression::new(Uuid::new_v4(), panels());

        // Act
        let first = progression.unlock_ring(RingIndex::SECOND, Uuid::new_v4(), &clock);
        let second = progression.unlock_ring(RingIndex::SECOND, Uuid::new_v4(), &clock);

        // Assert
        assert!(first);
        assert!(!second);
        assert_eq!(progression.ring_state(RingIndex::SECOND), RingState::Unlocked);
        assert_eq!(progression.ring_state(RingIndex::FIRST), RingState::Locked);
        assert_eq!(progression.uncommitted_events().len(), 1);
    }

    #[test]
    fn test_replaying_events_rebuilds_state() {
        // Arrange
        let clock = FixedClock(valentine_morning());
        let id = Uuid::new_v4();
        let mut original = Progression::new(id, panels());
        original.unlock_ring(RingIndex::FIRST, Uuid::new_v4(), &clock);
        original.deactivate_current(Uuid::new_v4(), &clock);
        original.activate(&PanelId::from("p2-text"), Uuid::new_v4(), &clock);

        // Act
        let mut replayed = Progression::new(id, panels());
        for event in original.uncommitted_events() {
            replayed.apply(event);
        }

        // Assert
        assert_eq!(replayed.version(), original.version());
        assert_eq!(replayed.active_panel(), original.active_panel());
        assert_eq!(replayed.rings(), original.rings());
    }
}
