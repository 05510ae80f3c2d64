//! Aggregate root for the color-mixing puzzle.

use ringlock_core::aggregate::AggregateRoot;
use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::event::EventMetadata;
use serde::Serialize;
use uuid::Uuid;

use super::color::{ColorSample, mean_color};
use super::events::{ColorMixEvent, ColorMixEventKind, MixReset, MixSolved, SampleAdded};

/// Puzzle state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MixPhase {
    /// Nothing in the bowl.
    Empty,
    /// At least one sample, target not reached.
    Mixing,
    /// Target reached; the bowl no longer accepts input.
    Solved,
}

/// What a sample drop did to the mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixOutcome {
    /// The mix changed but is not the target yet.
    Mixing {
        /// Average after the drop.
        mean: ColorSample,
    },
    /// The drop produced the target color.
    Solved {
        /// The winning average.
        mean: ColorSample,
    },
}

/// The aggregate root for the color-mixing bowl.
#[derive(Debug)]
pub struct ColorMix {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// Every sample since the last reset, in drop order.
    pub(crate) samples: Vec<ColorSample>,
    /// Set once the target has been reached.
    pub(crate) solved: bool,
    /// Events not yet committed to the journal.
    uncommitted_events: Vec<ColorMixEvent>,
}

impl ColorMix {
    /// Creates an empty bowl.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            samples: Vec::new(),
            solved: false,
            uncommitted_events: Vec::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MixPhase {
        if self.solved {
            MixPhase::Solved
        } else if self.samples.is_empty() {
            MixPhase::Empty
        } else {
            MixPhase::Mixing
        }
    }

    /// Average of the current mix; `None` while empty.
    #[must_use]
    pub fn mean(&self) -> Option<ColorSample> {
        mean_color(&self.samples)
    }

    /// Samples in the bowl, in drop order.
    #[must_use]
    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    /// Returns `true` once the target has been reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Drops a sample into the bowl and checks the recomputed average
    /// against the target.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` once the puzzle is solved.
    pub fn add_sample(
        &mut self,
        sample: ColorSample,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<MixOutcome, DomainError> {
        self.ensure_open()?;

        self.record(
            ColorMixEventKind::SampleAdded(SampleAdded { sample }),
            correlation_id,
            clock,
        );
        let mean = mean_color(&self.samples).unwrap_or(sample);

        if mean.is_target_pink() {
            self.record(
                ColorMixEventKind::MixSolved(MixSolved { mean }),
                correlation_id,
                clock,
            );
            return Ok(MixOutcome::Solved { mean });
        }
        Ok(MixOutcome::Mixing { mean })
    }

    /// Empties the bowl.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` once the puzzle is solved.
    pub fn reset(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.record(
            ColorMixEventKind::MixReset(MixReset {
                discarded: self.samples.len(),
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.solved {
            return Err(DomainError::Validation(
                "color mix is already solved".to_owned(),
            ));
        }
        Ok(())
    }

    fn record(&mut self, kind: ColorMixEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = ColorMixEvent {
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

impl AggregateRoot for ColorMix {
    type Event = ColorMixEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            ColorMixEventKind::SampleAdded(payload) => self.samples.push(payload.sample),
            ColorMixEventKind::MixReset(_) => self.samples.clear(),
            ColorMixEventKind::MixSolved(_) => self.solved = true,
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

    fn clock() -> FixedClock {
        FixedClock(valentine_morning())
    }

    #[test]
    fn test_first_sample_moves_empty_bowl_to_mixing() {
        // Arrange
        let mut mix = ColorMix::new(Uuid::new_v4());
        assert_eq!(mix.phase(), MixPhase::Empty);

        // Act
        let outcome = mix
            .add_sample(ColorSample::new(255, 0, 0), Uuid::new_v4(), &clock())
            .unwrap();

        // Assert
        assert_eq!(
            outcome,
            MixOutcome::Mixing {
                mean: ColorSample::new(255, 0, 0)
            }
        );
        assert_eq!(mix.phase(), MixPhase::Mixing);
        assert_eq!(mix.uncommitted_events()[0].event_type(), "color_mix.sample_added");
    }

    #[test]
    fn test_red_heavy_mix_does_not_solve() {
        let mut mix = ColorMix::new(Uuid::new_v4());
        let clock = clock();

        for sample in [(255, 0, 0), (255, 200, 150), (255, 150, 150)] {
            let (r, g, b) = sample;
            mix.add_sample(ColorSample::new(r, g, b), Uuid::new_v4(), &clock)
                .unwrap();
        }

        assert_eq!(mix.mean(), Some(ColorSample::new(255, 117, 100)));
        assert!(!mix.is_solved());
    }

    #[test]
    fn test_mix_averaging_to_pink_solves() {
        // Arrange
        let mut mix = ColorMix::new(Uuid::new_v4());
        let clock = clock();
        mix.add_sample(ColorSample::new(255, 255, 255), Uuid::new_v4(), &clock)
            .unwrap();

        // Act
        let outcome = mix
            .add_sample(ColorSample::new(185, 25, 35), Uuid::new_v4(), &clock)
            .unwrap();

        // Assert
        assert_eq!(
            outcome,
            MixOutcome::Solved {
                mean: ColorSample::new(220, 140, 145)
            }
        );
        assert_eq!(mix.phase(), MixPhase::Solved);
        let types: Vec<&str> = mix
            .uncommitted_events()
            .iter()
            .map(DomainEvent::event_type)
            .collect();
        assert_eq!(
            types,
            vec![
                "color_mix.sample_added",
                "color_mix.sample_added",
                "color_mix.solved"
            ]
        );
    }

    #[test]
    fn test_solved_bowl_rejects_further_input() {
        let mut mix = ColorMix::new(Uuid::new_v4());
        let clock = clock();
        mix.add_sample(ColorSample::new(220, 140, 145), Uuid::new_v4(), &clock)
            .unwrap();

        let added = mix.add_sample(ColorSample::new(0, 0, 0), Uuid::new_v4(), &clock);
        let reset = mix.reset(Uuid::new_v4(), &clock);

        assert!(matches!(added, Err(DomainError::Validation(_))));
        assert!(matches!(reset, Err(DomainError::Validation(_))));
        assert_eq!(mix.samples().len(), 1);
    }

    #[test]
    fn test_reset_mid_sequence_returns_to_empty() {
        // Arrange
        let mut mix = ColorMix::new(Uuid::new_v4());
        let clock = clock();
        mix.add_sample(ColorSample::new(255, 0, 0), Uuid::new_v4(), &clock)
            .unwrap();
        mix.add_sample(ColorSample::new(255, 255, 255), Uuid::new_v4(), &clock)
            .unwrap();

        // Act
        mix.reset(Uuid::new_v4(), &clock).unwrap();

        // Assert
        assert_eq!(mix.phase(), MixPhase::Empty);
        assert_eq!(mix.mean(), None);
        assert_eq!(mix.version(), 3);
    }

    #[test]
    fn test_history_before_reset_does_not_leak_into_mean() {
        let mut mix = ColorMix::new(Uuid::new_v4());
        let clock = clock();
        mix.add_sample(ColorSample::new(0, 0, 0), Uuid::new_v4(), &clock)
            .unwrap();
        mix.reset(Uuid::new_v4(), &clock).unwrap();

        let outcome = mix
            .add_sample(ColorSample::new(220, 140, 145), Uuid::new_v4(), &clock)
            .unwrap();

        assert!(matches!(outcome, MixOutcome::Solved { .. }));
    }
}
