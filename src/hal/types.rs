use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport-level failures of the voice channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    /// Nothing was said before the listen window closed
    Timeout,
    /// Audio was captured but could not be transcribed
    Unintelligible,
    /// The transcription service failed
    Service(String),
    /// The voice source has shut down for good
    Closed,
}

impl VoiceError {
    /// Whether listening should go on after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, VoiceError::Closed)
    }
}

impl fmt::Display for VoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceError::Timeout => write!(f, "listen timed out"),
            VoiceError::Unintelligible => write!(f, "speech not understood"),
            VoiceError::Service(msg) => write!(f, "speech recognition error: {}", msg),
            VoiceError::Closed => write!(f, "voice source closed"),
        }
    }
}

impl std::error::Error for VoiceError {}

/// How audio cue requests are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuePolicy {
    /// Every request plays on its own thread; cues may overlap
    #[default]
    Unbounded,
    /// One player thread; requests that arrive while it is busy collapse
    /// into the most recent one
    LatestWins,
}
