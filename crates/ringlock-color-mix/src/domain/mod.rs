//! Domain model for the color-mixing puzzle.

pub mod aggregates;
pub mod color;
pub mod commands;
pub mod events;
