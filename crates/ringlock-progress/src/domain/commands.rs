//! Commands for panel progression.

use ringlock_core::command::Command;
use uuid::Uuid;

use super::values::{PanelId, RingIndex};

/// Command to leave the active panel and, after the fade, show `target`.
#[derive(Debug, Clone)]
pub struct TransitionTo {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Panel to show once the fade completes.
    pub target: PanelId,
}

impl Command for TransitionTo {
    fn command_type(&self) -> &'static str {
        "progress.transition_to"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command fired by the scheduler when a fade completes.
#[derive(Debug, Clone)]
pub struct ActivatePanel {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Panel to show.
    pub target: PanelId,
}

impl Command for ActivatePanel {
    fn command_type(&self) -> &'static str {
        "progress.activate_panel"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to award a ring and move on to `next_panel`.
#[derive(Debug, Clone)]
pub struct UnlockRing {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Ring to award.
    pub ring: RingIndex,
    /// Panel to transition to after the celebration delay.
    pub next_panel: PanelId,
}

impl Command for UnlockRing {
    fn command_type(&self) -> &'static str {
        "progress.unlock_ring"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
