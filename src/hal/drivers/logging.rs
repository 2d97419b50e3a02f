use anyhow::Result;
use log::{debug, info};

use crate::core::{DisplaySize, InputCommand};
use crate::hal::traits::{ActionExecutor, CueSink};

/// Executor that only logs what it would inject
pub struct LoggingExecutor {
    display: DisplaySize,
}

impl LoggingExecutor {
    pub fn new(display: DisplaySize) -> Self {
        Self { display }
    }
}

impl Default for LoggingExecutor {
    fn default() -> Self {
        Self::new(DisplaySize::default())
    }
}

impl ActionExecutor for LoggingExecutor {
    fn perform(&mut self, command: InputCommand) {
        match command {
            // One per frame while pointing; keep it out of the info stream
            InputCommand::MoveTo(p) => debug!("Cursor -> ({:.1}, {:.1})", p.x, p.y),
            other => info!("Input: {:?}", other),
        }
    }

    fn display_size(&self) -> DisplaySize {
        self.display
    }
}

/// Cue sink for machines without audio output
pub struct LogCueSink;

impl CueSink for LogCueSink {
    fn play(&self, cue: &str) -> Result<()> {
        info!("Audio cue: {}", cue);
        Ok(())
    }
}
