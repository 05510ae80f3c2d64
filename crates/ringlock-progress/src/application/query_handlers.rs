//! Query handlers for panel progression.

use serde::Serialize;

use crate::domain::aggregates::Progression;
use crate::domain::values::{PanelId, RingIndex, RingState};

/// Read-only view of one ring.
#[derive(Debug, Clone, Serialize)]
pub struct RingView {
    /// One-based ring index.
    pub ring: RingIndex,
    /// Whether it has been earned.
    pub state: RingState,
}

/// Read-only view of the progression aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    /// The panel on screen, if any.
    pub active_panel: Option<PanelId>,
    /// All four rings, ring 1 first.
    pub rings: Vec<RingView>,
    /// Current version (event count).
    pub version: i64,
}

impl ProgressView {
    /// Number of rings earned so far.
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.rings
            .iter()
            .filter(|r| r.state == RingState::Unlocked)
            .count()
    }
}

/// Builds the view of `progression`.
#[must_use]
pub fn get_progress(progression: &Progression) -> ProgressView {
    let rings = [
        RingIndex::FIRST,
        RingIndex::SECOND,
        RingIndex::THIRD,
        RingIndex::FOURTH,
    ]
    .into_iter()
    .map(|ring| RingView {
        ring,
        state: progression.ring_state(ring),
    })
    .collect();

    ProgressView {
        active_panel: progression.active.clone(),
        rings,
        version: progression.version,
    }
}
