//! Ringlock Core: shared domain abstractions.
//!
//! This crate defines the traits and types every puzzle context depends on:
//! aggregates and their events, the session journal, deferred-task
//! scheduling, and the clock/RNG seams that keep the game deterministic
//! under test. It contains no presentation code.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod journal;
pub mod rng;
pub mod schedule;
