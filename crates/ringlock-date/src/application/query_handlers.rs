//! Query handlers for the date-confirmation puzzle.

use serde::Serialize;

use crate::domain::aggregates::{DateCheck, InputFeedback};

/// Read-only view of the date prompt.
#[derive(Debug, Clone, Serialize)]
pub struct DateView {
    /// Current input color.
    pub feedback: InputFeedback,
    /// Wrong answers so far.
    pub failed_attempts: u32,
    /// Whether the date is confirmed.
    pub solved: bool,
}

/// Builds the view of `prompt`.
#[must_use]
pub fn get_date(prompt: &DateCheck) -> DateView {
    DateView {
        feedback: prompt.feedback,
        failed_attempts: prompt.failed_attempts,
        solved: prompt.solved,
    }
}
