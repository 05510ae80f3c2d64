//! Domain model for the date-confirmation puzzle.

pub mod aggregates;
pub mod commands;
pub mod events;
