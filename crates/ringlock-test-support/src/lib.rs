//! Shared test doubles for the Ringlock puzzle sequence.

mod audio;
mod clock;
mod rng;

pub use audio::{AudioCall, RecordingAudio};
pub use clock::{FixedClock, ManualClock, valentine_morning};
pub use rng::{MockRng, SequenceRng};
