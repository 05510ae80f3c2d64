//! Stateful audio engine over a pluggable backend.

use thiserror::Error;
use tracing::debug;

use crate::port::{AudioPort, ToneKind};
use crate::tones::ToneRecipe;

/// Failures a backend may report. The engine logs and swallows all of them.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No sound device could be opened.
    #[error("audio device unavailable: {0}")]
    Unavailable(String),

    /// The host refused to start playback without a user gesture.
    #[error("autoplay blocked by host")]
    AutoplayBlocked,

    /// Playback started but failed.
    #[error("playback failed: {0}")]
    Playback(String),
}

/// The device side of the audio port, provided by the presentation layer.
pub trait AudioBackend: Send {
    /// Creates the sound context, or resumes it if the host suspended it.
    ///
    /// # Errors
    ///
    /// Returns `AudioError::Unavailable` if no device can be opened.
    fn open_context(&mut self) -> Result<(), AudioError>;

    /// Renders a cue.
    ///
    /// # Errors
    ///
    /// Returns `AudioError::Playback` if rendering fails.
    fn play(&mut self, recipe: &ToneRecipe) -> Result<(), AudioError>;

    /// Starts (or resumes) the background track.
    ///
    /// # Errors
    ///
    /// Returns `AudioError::AutoplayBlocked` if the host refuses playback.
    fn start_music(&mut self) -> Result<(), AudioError>;

    /// Mutes or unmutes the background track without stopping it.
    fn set_music_muted(&mut self, muted: bool);

    /// Returns `true` if the background track is not currently playing.
    fn music_paused(&self) -> bool;
}

/// [`AudioPort`] implementation with the two-phase init guard.
#[derive(Debug)]
pub struct AudioEngine<B> {
    backend: B,
    context_ready: bool,
    muted: bool,
    music_playing: bool,
}

impl<B: AudioBackend> AudioEngine<B> {
    /// Wraps `backend`. Nothing touches the device until [`AudioPort::init`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            context_ready: false,
            muted: false,
            music_playing: false,
        }
    }

    /// Starts muted; useful when the player asked for silence up front.
    pub fn muted(backend: B) -> Self {
        Self {
            muted: true,
            ..Self::new(backend)
        }
    }

    /// Returns `true` once background music has started.
    #[must_use]
    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    /// Borrow the backend (for inspection in tests and diagnostics).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn start_music(&mut self) {
        match self.backend.start_music() {
            Ok(()) => self.music_playing = true,
            Err(e) => debug!(error = %e, "background music did not start"),
        }
    }
}

impl<B: AudioBackend> AudioPort for AudioEngine<B> {
    fn init(&mut self) {
        if !self.context_ready {
            match self.backend.open_context() {
                Ok(()) => self.context_ready = true,
                Err(e) => debug!(error = %e, "audio context unavailable"),
            }
        }

        if !self.music_playing && !self.muted {
            self.start_music();
        }
    }

    fn play_tone(&mut self, kind: ToneKind) {
        if self.muted || !self.context_ready {
            return;
        }
        if let Err(e) = self.backend.play(&ToneRecipe::for_kind(kind)) {
            debug!(error = %e, ?kind, "tone playback failed");
        }
    }

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.backend.set_music_muted(self.muted);

        if !self.muted && self.backend.music_paused() {
            self.start_music();
        }

        self.muted
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
