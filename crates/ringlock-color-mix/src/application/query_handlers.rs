//! Query handlers for the color-mixing puzzle.

use serde::Serialize;

use crate::domain::aggregates::{ColorMix, MixPhase};
use crate::domain::color::ColorSample;

/// Read-only view of the mixing bowl.
#[derive(Debug, Clone, Serialize)]
pub struct ColorMixView {
    /// Current phase.
    pub phase: MixPhase,
    /// Number of samples in the bowl.
    pub sample_count: usize,
    /// Color shown in the bowl; `None` shows the empty-bowl hint.
    pub mean: Option<ColorSample>,
}

/// Builds the view of `mix`.
#[must_use]
pub fn get_color_mix(mix: &ColorMix) -> ColorMixView {
    ColorMixView {
        phase: mix.phase(),
        sample_count: mix.samples.len(),
        mean: mix.mean(),
    }
}
