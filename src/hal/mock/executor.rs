use std::sync::{Arc, Mutex};

use crate::core::{DisplaySize, InputCommand};
use crate::hal::traits::ActionExecutor;

/// Executor that records every command. Clones share the same log.
#[derive(Clone)]
pub struct RecordingExecutor {
    commands: Arc<Mutex<Vec<InputCommand>>>,
    display: DisplaySize,
}

impl RecordingExecutor {
    pub fn new(display: DisplaySize) -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            display,
        }
    }

    pub fn commands(&self) -> Vec<InputCommand> {
        self.commands
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.commands
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self::new(DisplaySize::default())
    }
}

impl ActionExecutor for RecordingExecutor {
    fn perform(&mut self, command: InputCommand) {
        self.commands
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(command);
    }

    fn display_size(&self) -> DisplaySize {
        self.display
    }
}
