use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::HandPose;

/// Everything the pose source observed during one camera tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Offset from the start of the run
    pub timestamp: Duration,

    /// Sequential frame number for ordering
    pub sequence_id: u64,

    /// Detected hands, in the order the pose source reported them
    pub hands: Vec<HandPose>,

    /// Exit key reported by the display surface during this tick
    #[serde(default)]
    pub exit_requested: bool,
}

impl PoseFrame {
    pub fn new(timestamp: Duration, sequence_id: u64) -> Self {
        Self {
            timestamp,
            sequence_id,
            hands: Vec::new(),
            exit_requested: false,
        }
    }

    pub fn with_hand(mut self, hand: HandPose) -> Self {
        self.hands.push(hand);
        self
    }

    pub fn with_exit_requested(mut self) -> Self {
        self.exit_requested = true;
        self
    }

    /// Hand the pipeline acts on: the last one reported wins
    pub fn primary_hand(&self) -> Option<&HandPose> {
        self.hands.last()
    }
}
