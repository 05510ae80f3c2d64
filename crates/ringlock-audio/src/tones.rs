//! Fixed waveform recipes for the two cues.

use serde::Serialize;

use crate::port::ToneKind;

/// One oscillator with a gain envelope. Times are seconds from the start of
/// the cue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Voice {
    /// Oscillator frequency.
    pub frequency_hz: f32,
    /// Gain at the start of the cue.
    pub initial_gain: f32,
    /// Gain reached at the end of the attack.
    pub peak_gain: f32,
    /// End of the linear attack ramp; zero for an instant onset.
    pub attack_secs: f32,
    /// Gain at the end of the exponential release.
    pub floor_gain: f32,
    /// When the release reaches `floor_gain` and the oscillator stops.
    pub stop_secs: f32,
}

/// The set of voices that make up a cue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneRecipe {
    /// Which cue this is.
    pub kind: ToneKind,
    /// Voices started together.
    pub voices: Vec<Voice>,
}

const CLICK_HZ: f32 = 600.0;
const SOLVE_CHORD_HZ: [f32; 3] = [440.0, 554.0, 659.0];

impl ToneRecipe {
    /// Returns the recipe for `kind`.
    #[must_use]
    pub fn for_kind(kind: ToneKind) -> Self {
        match kind {
            ToneKind::Click => Self {
                kind,
                voices: vec![Voice {
                    frequency_hz: CLICK_HZ,
                    initial_gain: 0.05,
                    peak_gain: 0.05,
                    attack_secs: 0.0,
                    floor_gain: 0.001,
                    stop_secs: 0.1,
                }],
            },
            ToneKind::Solve => Self {
                kind,
                voices: SOLVE_CHORD_HZ
                    .iter()
                    .zip([0.1_f32, 0.2, 0.3])
                    .map(|(&frequency_hz, attack_secs)| Voice {
                        frequency_hz,
                        initial_gain: 0.0,
                        peak_gain: 0.1,
                        attack_secs,
                        floor_gain: 0.001,
                        stop_secs: 2.0,
                    })
                    .collect(),
            },
        }
    }

    /// Length of the cue in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f32 {
        self.voices.iter().map(|v| v.stop_secs).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_is_a_single_short_voice() {
        let recipe = ToneRecipe::for_kind(ToneKind::Click);

        assert_eq!(recipe.voices.len(), 1);
        assert!((recipe.voices[0].frequency_hz - 600.0).abs() < f32::EPSILON);
        assert!((recipe.duration_secs() - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_solve_chord_staggers_attacks() {
        let recipe = ToneRecipe::for_kind(ToneKind::Solve);

        let freqs: Vec<f32> = recipe.voices.iter().map(|v| v.frequency_hz).collect();
        assert_eq!(freqs, vec![440.0, 554.0, 659.0]);
        assert!(recipe.voices[0].attack_secs < recipe.voices[1].attack_secs);
        assert!(recipe.voices[1].attack_secs < recipe.voices[2].attack_secs);
        assert!((recipe.duration_secs() - 2.0).abs() < f32::EPSILON);
    }
}
