//! Application services for the jigsaw puzzle.

pub mod command_handlers;
pub mod query_handlers;
