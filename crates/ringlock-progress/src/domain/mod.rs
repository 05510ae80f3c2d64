//! Domain model for panel progression.

pub mod aggregates;
pub mod commands;
pub mod events;
pub mod values;
