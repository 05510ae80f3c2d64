//! Commands for the color-mixing puzzle.

use ringlock_core::command::Command;
use uuid::Uuid;

use super::color::ColorSample;

/// Command to drop a paint sample into the bowl.
#[derive(Debug, Clone)]
pub struct AddSample {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The dropped color.
    pub sample: ColorSample,
}

impl Command for AddSample {
    fn command_type(&self) -> &'static str {
        "color_mix.add_sample"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to empty the bowl.
#[derive(Debug, Clone)]
pub struct ResetMix {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetMix {
    fn command_type(&self) -> &'static str {
        "color_mix.reset"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
