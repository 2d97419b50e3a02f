use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Per-run frame counters, shared between the pipeline and its monitor
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    frames_processed: AtomicU64,
    frames_without_hand: AtomicU64,
    unmatched_gestures: AtomicU64,
    actions_fired: AtomicU64,
    actions_suppressed: AtomicU64,
    cursor_moves: AtomicU64,
    total_latency_us: AtomicU64,
    latency_samples: AtomicU64,
}

/// Point-in-time copy of [`PipelineMetrics`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub frames_processed: u64,
    pub frames_without_hand: u64,
    pub unmatched_gestures: u64,
    pub actions_fired: u64,
    pub actions_suppressed: u64,
    pub cursor_moves: u64,
    pub avg_latency_us: u64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed.load(Ordering::Relaxed)
    }

    pub fn actions_fired(&self) -> u64 {
        self.actions_fired.load(Ordering::Relaxed)
    }

    pub fn actions_suppressed(&self) -> u64 {
        self.actions_suppressed.load(Ordering::Relaxed)
    }

    pub fn record_frame(&self) {
        self.frames_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_no_hand(&self) {
        self.frames_without_hand.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unmatched(&self) {
        self.unmatched_gestures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fired(&self) {
        self.actions_fired.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_suppressed(&self) {
        self.actions_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cursor_move(&self) {
        self.cursor_moves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn start_processing(&self) -> Instant {
        Instant::now()
    }

    pub fn finish_processing(&self, start: Instant) {
        let latency_us = start.elapsed().as_micros() as u64;
        self.total_latency_us.fetch_add(latency_us, Ordering::Relaxed);
        self.latency_samples.fetch_add(1, Ordering::Relaxed);
    }

    pub fn avg_latency_us(&self) -> u64 {
        let samples = self.latency_samples.load(Ordering::Relaxed);
        if samples == 0 {
            return 0;
        }
        self.total_latency_us.load(Ordering::Relaxed) / samples
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            frames_processed: self.frames_processed(),
            frames_without_hand: self.frames_without_hand.load(Ordering::Relaxed),
            unmatched_gestures: self.unmatched_gestures.load(Ordering::Relaxed),
            actions_fired: self.actions_fired(),
            actions_suppressed: self.actions_suppressed(),
            cursor_moves: self.cursor_moves.load(Ordering::Relaxed),
            avg_latency_us: self.avg_latency_us(),
        }
    }
}
