//! Ringlock: riddle-unveiled jigsaw puzzle.
//!
//! Four pieces start hidden behind riddles. Answering a riddle reveals its
//! piece; the ring unlocks when every piece sits in its own slot.

pub mod application;
pub mod domain;
