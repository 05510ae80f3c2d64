//! Commands for the date-confirmation puzzle.

use ringlock_core::command::Command;
use uuid::Uuid;

/// Command issued by the check button.
#[derive(Debug, Clone)]
pub struct CheckDate {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Raw input text.
    pub input: String,
}

impl Command for CheckDate {
    fn command_type(&self) -> &'static str {
        "date.check"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command fired by the scheduler to fade the alert color.
#[derive(Debug, Clone)]
pub struct ClearFeedback {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ClearFeedback {
    fn command_type(&self) -> &'static str {
        "date.clear_feedback"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
