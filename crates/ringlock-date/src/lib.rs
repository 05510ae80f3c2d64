//! Ringlock: date-confirmation puzzle.

pub mod application;
pub mod domain;
