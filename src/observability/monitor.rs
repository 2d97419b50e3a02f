use std::sync::Arc;

use super::{MetricsSnapshot, PipelineMetrics};

pub struct PipelineMonitor {
    metrics: Arc<PipelineMetrics>,
}

impl PipelineMonitor {
    pub fn new(metrics: Arc<PipelineMetrics>) -> Self {
        Self { metrics }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn generate_report(&self) -> String {
        let s = self.metrics.snapshot();

        if s.frames_processed == 0 {
            return "No frames processed".to_string();
        }

        format!(
            "=== Gesture Pipeline ===\n  Frames: {} frames processed ({} without hand)\n  Gestures: {} unmatched\n  Actions: {} fired, {} suppressed\n  Cursor: {} moves\n  Avg Latency: {}μs\n",
            s.frames_processed,
            s.frames_without_hand,
            s.unmatched_gestures,
            s.actions_fired,
            s.actions_suppressed,
            s.cursor_moves,
            s.avg_latency_us
        )
    }
}
