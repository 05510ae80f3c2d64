//! Ringlock: audio feedback port.
//!
//! Puzzles never talk to a sound device. They ask an [`AudioPort`] for a
//! short "click" cue or the "solve" chord; the [`AudioEngine`] turns those
//! requests into [`ToneRecipe`]s for whatever [`AudioBackend`] the
//! presentation layer provides, and absorbs every backend failure.

pub mod engine;
pub mod port;
pub mod tones;

pub use engine::{AudioBackend, AudioEngine, AudioError};
pub use port::{AudioPort, MuteIndicator, ToneKind};
pub use tones::{ToneRecipe, Voice};
