//! Domain model for the argument-sorting puzzle.

pub mod aggregates;
pub mod arguments;
pub mod commands;
pub mod events;
