use anyhow::{bail, Result};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::core::ActionKind;
use crate::hal::traits::{AudioFeedback, CueSink};

/// Records cue names in request order. Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    cues: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<&'static str> {
        self.cues
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl AudioFeedback for RecordingAudio {
    fn request(&self, action: ActionKind) {
        if let Some(cue) = action.cue_name() {
            self.cues
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(cue);
        }
    }
}

/// Blocking sink that records what it played, optionally failing every call.
///
/// `attempted` logs every call, `played` only the successful ones.
#[derive(Clone, Default)]
pub struct RecordingCueSink {
    attempted: Arc<Mutex<Vec<String>>>,
    played: Arc<Mutex<Vec<String>>>,
    fail: bool,
    playback: Duration,
}

impl RecordingCueSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Block for `playback` on every call, like a real tone would
    pub fn with_playback(mut self, playback: Duration) -> Self {
        self.playback = playback;
        self
    }

    pub fn attempted(&self) -> Vec<String> {
        lock_log(&self.attempted)
    }

    pub fn played(&self) -> Vec<String> {
        lock_log(&self.played)
    }
}

fn lock_log(log: &Mutex<Vec<String>>) -> Vec<String> {
    log.lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn push_log(log: &Mutex<Vec<String>>, cue: &str) {
    log.lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push(cue.to_string());
}

impl CueSink for RecordingCueSink {
    fn play(&self, cue: &str) -> Result<()> {
        push_log(&self.attempted, cue);
        if !self.playback.is_zero() {
            thread::sleep(self.playback);
        }
        if self.fail {
            bail!("Simulated audio failure");
        }
        push_log(&self.played, cue);
        Ok(())
    }
}
