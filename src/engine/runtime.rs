use anyhow::{anyhow, Result};
use log::{error, info};
use std::sync::Arc;
use std::time::Instant;

use super::cancel::{CancellationCoordinator, CancellationFlag};
use super::pipeline::{FrameOutcome, FramePipeline, PipelineSettings};
use super::state::{RunState, StopReason};
use crate::config::ControlConfig;
use crate::gesture::MappingTable;
use crate::hal::{ActionExecutor, AudioFeedback, PoseSource, VoiceSource};
use crate::observability::{MetricsSnapshot, PipelineMetrics, PipelineMonitor};
use crate::voice::spawn_exit_listener;

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub stop_reason: StopReason,
    pub frames_processed: u64,
    pub metrics: MetricsSnapshot,
}

/// Drives the frame pipeline from a pose source while a voice listener
/// runs alongside it.
pub struct GestureRuntime {
    pipeline: FramePipeline,
    cancel: CancellationFlag,
    voice: Option<Box<dyn VoiceSource>>,
    metrics: Arc<PipelineMetrics>,
    state: RunState,
}

impl GestureRuntime {
    /// Fails when the mapping table is empty
    pub fn new(
        config: &ControlConfig,
        table: MappingTable,
        executor: Box<dyn ActionExecutor>,
        audio: Arc<dyn AudioFeedback>,
    ) -> Result<Self> {
        let cancel = CancellationFlag::new();
        let pipeline = FramePipeline::new(
            table,
            PipelineSettings::from(config),
            CancellationCoordinator::new(cancel.clone()),
            executor,
            audio,
        )?;
        let metrics = pipeline.metrics();

        Ok(Self {
            pipeline,
            cancel,
            voice: None,
            metrics,
            state: RunState::Idle,
        })
    }

    /// Listen on `source` for exit phrases during the run
    pub fn with_voice(mut self, source: Box<dyn VoiceSource>) -> Self {
        self.voice = Some(source);
        self
    }

    /// Handle for cancelling the run from elsewhere
    pub fn cancellation(&self) -> CancellationFlag {
        self.cancel.clone()
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn monitor(&self) -> PipelineMonitor {
        PipelineMonitor::new(self.metrics.clone())
    }

    fn transition_to(&mut self, new_state: RunState) -> Result<()> {
        if !self.state.can_transition_to(&new_state) {
            return Err(anyhow!(
                "Invalid state transition: {} -> {}",
                self.state.name(),
                new_state.name()
            ));
        }
        self.state = new_state;
        Ok(())
    }

    /// Process frames until cancelled, the exit key is pressed, or the source
    /// ends. A source error stops the run and is returned.
    pub async fn run(&mut self, source: &mut dyn PoseSource) -> Result<RunReport> {
        let start_time = Instant::now();
        self.transition_to(RunState::Running {
            start_time: Some(start_time),
        })?;
        info!("Gesture control running");

        let listener = self
            .voice
            .take()
            .map(|voice| spawn_exit_listener(voice, self.cancel.clone()));

        let result = self.poll_frames(source).await;

        // Listener may be parked inside a blocking listen; it has nothing to flush
        if let Some(handle) = listener {
            handle.abort();
        }

        match result {
            Ok(reason) => {
                self.transition_to(RunState::Completed {
                    duration: Some(start_time.elapsed()),
                    reason,
                })?;
                let metrics = self.metrics.snapshot();
                info!(
                    "Gesture control stopped ({:?}) after {} frames",
                    reason, metrics.frames_processed
                );
                info!("{}", self.monitor().generate_report());
                Ok(RunReport {
                    stop_reason: reason,
                    frames_processed: metrics.frames_processed,
                    metrics,
                })
            }
            Err(e) => {
                error!("Gesture control failed: {:#}", e);
                self.transition_to(RunState::Error {
                    error_msg: format!("{:#}", e),
                })?;
                Err(e)
            }
        }
    }

    async fn poll_frames(&mut self, source: &mut dyn PoseSource) -> Result<StopReason> {
        let cancel = self.cancel.clone();

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Ok(StopReason::VoiceCommand),
                next = source.read_frame() => next,
            };

            let frame = match next {
                Ok(Some(frame)) => frame,
                Ok(None) => return Ok(StopReason::SourceExhausted),
                Err(e) => return Err(e.context("Pose source failed to produce a frame")),
            };

            if let FrameOutcome::Halted(reason) = self.pipeline.process_frame(&frame) {
                return Ok(reason.into());
            }

            // Let the voice listener run between frames on a single-threaded runtime
            tokio::task::yield_now().await;
        }
    }
}
