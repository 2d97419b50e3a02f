use anyhow::{bail, Result};
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use super::cancel::{CancellationCoordinator, HaltReason};
use super::cooldown::{self, CooldownState};
use super::cursor::{self, CursorFilterState};
use crate::config::ControlConfig;
use crate::core::{ActionKind, CooldownClass, DisplaySize, InputCommand, PoseFrame, Position};
use crate::gesture::{classify, GestureCode, MappingTable};
use crate::hal::{ActionExecutor, AudioFeedback};
use crate::observability::PipelineMetrics;

/// Tunables the pipeline reads on every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub scroll_speed: i32,
    pub action_delay: Duration,
    pub smoothing: f64,
}

impl From<&ControlConfig> for PipelineSettings {
    fn from(config: &ControlConfig) -> Self {
        Self {
            scroll_speed: config.scroll_speed,
            action_delay: config.action_delay(),
            smoothing: config.smoothing,
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from(&ControlConfig::default())
    }
}

/// What one frame amounted to
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Run is over; nothing was done for this frame
    Halted(HaltReason),
    NoHand,
    /// Gesture recognized but not mapped
    Unmatched(GestureCode),
    CursorMoved(Position),
    Fired(ActionKind),
    /// Matched, but still cooling down
    Suppressed(ActionKind),
}

/// Classification-and-dispatch for one observation at a time.
///
/// Owns the cooldown and cursor state; nothing else mutates them. Once a halt
/// is observed every later frame is ignored.
pub struct FramePipeline {
    table: MappingTable,
    settings: PipelineSettings,
    cooldown: CooldownState,
    cursor: CursorFilterState,
    coordinator: CancellationCoordinator,
    executor: Box<dyn ActionExecutor>,
    audio: Arc<dyn AudioFeedback>,
    display: DisplaySize,
    metrics: Arc<PipelineMetrics>,
    halted: Option<HaltReason>,
}

impl FramePipeline {
    /// Fails when the table is empty: there is nothing to dispatch
    pub fn new(
        table: MappingTable,
        settings: PipelineSettings,
        coordinator: CancellationCoordinator,
        executor: Box<dyn ActionExecutor>,
        audio: Arc<dyn AudioFeedback>,
    ) -> Result<Self> {
        if table.is_empty() {
            bail!("No gesture mappings configured");
        }

        let display = executor.display_size();

        Ok(Self {
            table,
            settings,
            cooldown: CooldownState::new(),
            cursor: CursorFilterState::new(),
            coordinator,
            executor,
            audio,
            display,
            metrics: Arc::new(PipelineMetrics::new()),
            halted: None,
        })
    }

    pub fn metrics(&self) -> Arc<PipelineMetrics> {
        self.metrics.clone()
    }

    pub fn cooldown(&self) -> &CooldownState {
        &self.cooldown
    }

    pub fn cursor(&self) -> &CursorFilterState {
        &self.cursor
    }

    pub fn halted(&self) -> Option<HaltReason> {
        self.halted
    }

    pub fn process_frame(&mut self, frame: &PoseFrame) -> FrameOutcome {
        if let Some(reason) = self.halted {
            return FrameOutcome::Halted(reason);
        }
        if let Some(reason) = self.coordinator.check(frame.exit_requested) {
            debug!("Halting at frame {}: {:?}", frame.sequence_id, reason);
            self.halted = Some(reason);
            return FrameOutcome::Halted(reason);
        }

        let start = self.metrics.start_processing();
        let outcome = self.dispatch(frame);
        self.metrics.finish_processing(start);
        self.metrics.record_frame();

        match &outcome {
            FrameOutcome::NoHand => self.metrics.record_no_hand(),
            FrameOutcome::Unmatched(_) => self.metrics.record_unmatched(),
            FrameOutcome::CursorMoved(_) => self.metrics.record_cursor_move(),
            FrameOutcome::Fired(_) => self.metrics.record_fired(),
            FrameOutcome::Suppressed(_) => self.metrics.record_suppressed(),
            FrameOutcome::Halted(_) => {}
        }

        outcome
    }

    fn dispatch(&mut self, frame: &PoseFrame) -> FrameOutcome {
        let Some(pose) = frame.primary_hand() else {
            return FrameOutcome::NoHand;
        };

        let code = classify(pose);
        let Some(action) = self.table.find_action(code) else {
            return FrameOutcome::Unmatched(code);
        };

        if action.cooldown_class() == CooldownClass::Continuous {
            let target = cursor::target_for(pose, self.display);
            let position = cursor::update(target, &mut self.cursor, self.settings.smoothing);
            self.executor.perform(InputCommand::MoveTo(position));
            return FrameOutcome::CursorMoved(position);
        }

        if !cooldown::should_fire(
            action,
            frame.timestamp,
            &mut self.cooldown,
            self.settings.action_delay,
        ) {
            debug!("Suppressed {} (gesture {}) at {:?}", action, code, frame.timestamp);
            return FrameOutcome::Suppressed(action);
        }

        debug!("Firing {} (gesture {}) at {:?}", action, code, frame.timestamp);
        if let Some(command) = action.command(self.settings.scroll_speed) {
            self.executor.perform(command);
        }
        self.audio.request(action);

        FrameOutcome::Fired(action)
    }
}
