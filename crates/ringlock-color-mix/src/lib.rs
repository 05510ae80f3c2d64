//! Ringlock: color-mixing puzzle.
//!
//! The player drops paint samples into a bowl until the averaged color lands
//! in the target pink.

pub mod application;
pub mod domain;
