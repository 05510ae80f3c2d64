//! Domain model for the jigsaw puzzle.

pub mod aggregates;
pub mod board;
pub mod commands;
pub mod events;
