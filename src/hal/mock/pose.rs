use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::sleep;

use crate::core::pose::*;
use crate::core::{HandPose, Landmark, PoseFrame};
use crate::gesture::{Finger, GestureCode};
use crate::hal::traits::PoseSource;

/// Plays back a fixed list of frames
pub struct ScriptedPoseSource {
    frames: VecDeque<PoseFrame>,
    interval: Option<Duration>,
    fail_when_exhausted: bool,
}

impl ScriptedPoseSource {
    pub fn new(frames: Vec<PoseFrame>) -> Self {
        Self {
            frames: frames.into(),
            interval: None,
            fail_when_exhausted: false,
        }
    }

    /// Wait this long before handing out each frame
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Report a device failure instead of a clean end once the script runs out
    pub fn failing_when_exhausted(mut self) -> Self {
        self.fail_when_exhausted = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

#[async_trait]
impl PoseSource for ScriptedPoseSource {
    async fn read_frame(&mut self) -> Result<Option<PoseFrame>> {
        if let Some(interval) = self.interval {
            sleep(interval).await;
        }

        match self.frames.pop_front() {
            Some(frame) => Ok(Some(frame)),
            None if self.fail_when_exhausted => Err(anyhow!("Camera stopped delivering frames")),
            None => Ok(None),
        }
    }
}

// Resting layout of a mirrored right hand, fingers curled. Tip positions are
// filled in per finger state by `synthetic_hand`.
const BASE_LAYOUT: [(f64, f64); LANDMARK_COUNT] = [
    (0.50, 0.80), // wrist
    (0.45, 0.75),
    (0.42, 0.70),
    (0.40, 0.65), // thumb IP
    (0.40, 0.62), // thumb tip
    (0.47, 0.60),
    (0.47, 0.50), // index PIP
    (0.47, 0.52),
    (0.47, 0.55), // index tip
    (0.50, 0.60),
    (0.50, 0.50),
    (0.50, 0.52),
    (0.50, 0.55),
    (0.53, 0.60),
    (0.53, 0.50),
    (0.53, 0.52),
    (0.53, 0.55),
    (0.56, 0.62),
    (0.56, 0.52),
    (0.56, 0.54),
    (0.56, 0.57),
];

/// Hand pose whose classification is exactly `code`
pub fn synthetic_hand(code: GestureCode) -> HandPose {
    let mut points = BASE_LAYOUT.map(|(x, y)| Landmark::new(x, y));

    let thumb_ip = points[THUMB_IP];
    points[THUMB_TIP].x = if code.is_extended(Finger::Thumb) {
        thumb_ip.x - 0.05
    } else {
        thumb_ip.x + 0.04
    };

    let fingers = [
        (Finger::Index, INDEX_PIP, INDEX_DIP, INDEX_TIP),
        (Finger::Middle, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP),
        (Finger::Ring, RING_PIP, RING_DIP, RING_TIP),
        (Finger::Pinky, PINKY_PIP, PINKY_DIP, PINKY_TIP),
    ];
    for (finger, pip, dip, tip) in fingers {
        if code.is_extended(finger) {
            let pip_y = points[pip].y;
            points[dip].y = pip_y - 0.05;
            points[tip].y = pip_y - 0.10;
        }
    }

    HandPose::new(points)
}

/// Same as [`synthetic_hand`] with the index fingertip at (x, y)
pub fn synthetic_hand_at(code: GestureCode, x: f64, y: f64) -> HandPose {
    synthetic_hand(code).translated_to(INDEX_TIP, Landmark::new(x, y))
}
