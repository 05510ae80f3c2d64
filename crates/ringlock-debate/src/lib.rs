//! Ringlock: argument-sorting puzzle.
//!
//! Six debate arguments, each a boon or a bane, are dealt in random order.
//! The player sorts them into two zones; three banes in the right-hand zone
//! win the ring.

pub mod application;
pub mod domain;
