//! Ringlock: panel sequencing and ring unlocks.
//!
//! Owns which narrative panel is on screen, the four rings that mark solved
//! puzzles, and the delayed transitions that connect a solved puzzle to the
//! next panel.

pub mod application;
pub mod domain;
