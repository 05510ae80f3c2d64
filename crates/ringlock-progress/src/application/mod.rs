//! Application services for panel progression.

pub mod command_handlers;
pub mod query_handlers;
