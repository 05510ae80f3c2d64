//! Read model of a whole session.

use ringlock_audio::MuteIndicator;
use ringlock_color_mix::application::query_handlers::ColorMixView;
use ringlock_date::application::query_handlers::DateView;
use ringlock_debate::application::query_handlers::DebateView;
use ringlock_jigsaw::application::query_handlers::JigsawView;
use ringlock_progress::application::query_handlers::ProgressView;
use ringlock_progress::domain::values::PanelId;
use serde::Serialize;
use uuid::Uuid;

use crate::story::{PanelConfig, PuzzleKind};

/// The panel on screen.
#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    /// Panel identifier.
    pub id: PanelId,
    /// Heading.
    pub title: String,
    /// Body text.
    pub text: String,
    /// Where the next button leads.
    pub next: Option<PanelId>,
    /// Puzzle hosted on the panel.
    pub puzzle: Option<PuzzleKind>,
}

impl From<&PanelConfig> for PanelView {
    fn from(panel: &PanelConfig) -> Self {
        Self {
            id: panel.id.clone(),
            title: panel.title.clone(),
            text: panel.text.clone(),
            next: panel.next.clone(),
            puzzle: panel.puzzle,
        }
    }
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    /// Session identifier.
    pub session_id: Uuid,
    /// The panel on screen; `None` mid-transition.
    pub active_panel: Option<PanelView>,
    /// Rings and panel progression.
    pub progress: ProgressView,
    /// Whether sound is off.
    pub muted: bool,
    /// Glyph for the mute toggle.
    pub mute_indicator: MuteIndicator,
    /// Color-mix puzzle.
    pub color_mix: ColorMixView,
    /// Argument-sort puzzle.
    pub debate: DebateView,
    /// Jigsaw puzzle.
    pub jigsaw: JigsawView,
    /// Date puzzle.
    pub date: DateView,
    /// Deferred tasks not yet fired.
    pub pending_tasks: usize,
    /// Events journaled so far.
    pub journal_len: usize,
}
