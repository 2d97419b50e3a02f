use anyhow::Result;
use async_trait::async_trait;

use super::types::VoiceError;
use crate::core::{ActionKind, DisplaySize, InputCommand, PoseFrame};
use crate::gesture::MappingRule;

/// Camera plus landmark model, delivering one frame per tick
#[async_trait]
pub trait PoseSource: Send {
    /// Next observed frame.
    ///
    /// `Ok(None)` means the source ended cleanly. An error means the device
    /// can no longer produce frames and the run must stop.
    async fn read_frame(&mut self) -> Result<Option<PoseFrame>>;
}

/// Performs OS-level input on behalf of the pipeline
pub trait ActionExecutor: Send {
    /// Carry out one command. Failures stay inside the executor.
    fn perform(&mut self, command: InputCommand);

    /// Resolution cursor targets are projected onto
    fn display_size(&self) -> DisplaySize;
}

/// Non-blocking audio cue requests
pub trait AudioFeedback: Send + Sync {
    /// Request the cue for `action`. Must return without waiting for playback.
    fn request(&self, action: ActionKind);
}

/// Blocking cue playback, driven from a dispatcher thread
pub trait CueSink: Send + Sync {
    fn play(&self, cue: &str) -> Result<()>;
}

/// Speech-to-text channel listened to for exit phrases
#[async_trait]
pub trait VoiceSource: Send {
    /// Wait for the next utterance, lowercased
    async fn listen(&mut self) -> Result<String, VoiceError>;
}

/// Where mapping rules are read from, once per run
pub trait MappingStore {
    /// Ordered rules; empty when the store cannot be read
    fn load(&self) -> Vec<MappingRule>;
}
