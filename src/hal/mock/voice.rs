use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::sleep;

use crate::hal::traits::VoiceSource;
use crate::hal::types::VoiceError;

/// Replays a list of (delay, result) listen outcomes, then reports `Closed`
pub struct ScriptedVoiceSource {
    script: VecDeque<(Duration, Result<String, VoiceError>)>,
}

impl ScriptedVoiceSource {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
        }
    }

    /// Utterance heard after `delay`
    pub fn then_say(mut self, delay: Duration, utterance: &str) -> Self {
        self.script.push_back((delay, Ok(utterance.to_lowercase())));
        self
    }

    /// Failure reported after `delay`
    pub fn then_fail(mut self, delay: Duration, error: VoiceError) -> Self {
        self.script.push_back((delay, Err(error)));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Default for ScriptedVoiceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceSource for ScriptedVoiceSource {
    async fn listen(&mut self) -> Result<String, VoiceError> {
        match self.script.pop_front() {
            Some((delay, outcome)) => {
                sleep(delay).await;
                outcome
            }
            None => Err(VoiceError::Closed),
        }
    }
}
