//! Application services for the date-confirmation puzzle.

pub mod command_handlers;
pub mod query_handlers;
