//! Test audio: an `AudioPort` that records every call.

use std::sync::{Arc, Mutex};

use ringlock_audio::{AudioPort, ToneKind};

/// One observed call on the audio port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    /// `init` was called.
    Init,
    /// A tone was played while unmuted.
    Tone(ToneKind),
    /// Mute was toggled; carries the new state.
    ToggleMute(bool),
}

/// An audio port that records calls into a shared log. Clone it before
/// handing it to a session to keep a handle on the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    calls: Arc<Mutex<Vec<AudioCall>>>,
    muted: bool,
}

impl RecordingAudio {
    /// Creates an unmuted recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calls so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns how many times `kind` was audibly played.
    #[must_use]
    pub fn tones_played(&self, kind: ToneKind) -> usize {
        self.calls()
            .iter()
            .filter(|c| **c == AudioCall::Tone(kind))
            .count()
    }

    fn record(&self, call: AudioCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl AudioPort for RecordingAudio {
    fn init(&mut self) {
        self.record(AudioCall::Init);
    }

    fn play_tone(&mut self, kind: ToneKind) {
        if !self.muted {
            self.record(AudioCall::Tone(kind));
        }
    }

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.record(AudioCall::ToggleMute(self.muted));
        self.muted
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
