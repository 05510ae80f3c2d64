//! Application services for the argument-sorting puzzle.

pub mod command_handlers;
pub mod query_handlers;
