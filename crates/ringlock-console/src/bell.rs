//! Terminal audio backend: a bell per cue and a log line describing it.

use std::io::{self, Write};

use ringlock_audio::{AudioBackend, AudioError, ToneRecipe};
use tracing::info;

/// Rings the terminal bell for every cue. The terminal has no music track,
/// so background music is tracked but silent.
#[derive(Debug, Default)]
pub struct TerminalBell {
    music_started: bool,
    music_muted: bool,
}

impl TerminalBell {
    /// Creates a backend with music stopped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioBackend for TerminalBell {
    fn open_context(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn play(&mut self, recipe: &ToneRecipe) -> Result<(), AudioError> {
        let mut stdout = io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .map_err(|e| AudioError::Playback(e.to_string()))?;

        let frequencies: Vec<f32> = recipe.voices.iter().map(|v| v.frequency_hz).collect();
        info!(
            tone = ?recipe.kind,
            ?frequencies,
            duration_secs = recipe.duration_secs(),
            "tone played"
        );
        Ok(())
    }

    fn start_music(&mut self) -> Result<(), AudioError> {
        self.music_started = true;
        info!("background music started");
        Ok(())
    }

    fn set_music_muted(&mut self, muted: bool) {
        self.music_muted = muted;
        info!(muted, "background music mute changed");
    }

    fn music_paused(&self) -> bool {
        !self.music_started
    }
}

#[cfg(test)]
mod tests {
    use ringlock_audio::{AudioEngine, AudioPort, ToneKind};

    use super::*;

    #[test]
    fn test_init_starts_music_once_unmuted() {
        let mut engine = AudioEngine::new(TerminalBell::new());

        engine.init();
        engine.init();

        assert!(engine.music_playing());
        assert!(!engine.backend().music_paused());
    }

    #[test]
    fn test_muted_start_defers_music_until_unmute() {
        // Arrange
        let mut engine = AudioEngine::muted(TerminalBell::new());
        engine.init();
        assert!(!engine.music_playing());

        // Act
        let muted = engine.toggle_mute();

        // Assert
        assert!(!muted);
        assert!(engine.music_playing());
        assert!(!engine.backend().music_muted);
    }

    #[test]
    fn test_play_accepts_both_cues() {
        let mut bell = TerminalBell::new();

        for kind in [ToneKind::Click, ToneKind::Solve] {
            assert!(bell.play(&ToneRecipe::for_kind(kind)).is_ok());
        }
    }
}
