//! Application services for the color-mixing puzzle.

pub mod command_handlers;
pub mod query_handlers;
