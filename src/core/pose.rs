use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Number of landmarks reported per detected hand
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Normalized landmark coordinate.
///
/// `x` and `y` are in [0, 1] relative to the camera image, with `y`
/// increasing downward. `z` is relative depth and is optional on input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same landmark shifted by (dx, dy)
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }
}

/// One detected hand: 21 landmarks in the standard hand-model order
/// (wrist, then thumb CMC..tip, then index, middle, ring and pinky MCP..tip).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandPose {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandPose {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Build a pose from a landmark slice, rejecting anything but 21 points
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self> {
        if landmarks.len() != LANDMARK_COUNT {
            bail!(
                "Hand pose needs {} landmarks, got {}",
                LANDMARK_COUNT,
                landmarks.len()
            );
        }
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points.copy_from_slice(landmarks);
        Ok(Self { landmarks: points })
    }

    /// Landmark at one of the index constants of this module
    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    /// Same pose translated so that `index` lands on `target`
    pub fn translated_to(&self, index: usize, target: Landmark) -> Self {
        let anchor = self.landmarks[index];
        let (dx, dy) = (target.x - anchor.x, target.y - anchor.y);
        let mut landmarks = self.landmarks;
        for point in landmarks.iter_mut() {
            *point = point.offset(dx, dy);
        }
        landmarks[index] = Landmark::with_depth(target.x, target.y, anchor.z);
        Self { landmarks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let points = vec![Landmark::new(0.5, 0.5); 20];
        assert!(HandPose::from_slice(&points).is_err());

        let points = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        assert!(HandPose::from_slice(&points).is_ok());
    }

    #[test]
    fn test_translated_to_moves_anchor() {
        let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        points[INDEX_TIP] = Landmark::new(0.4, 0.3);
        let pose = HandPose::new(points);

        let moved = pose.translated_to(INDEX_TIP, Landmark::new(0.1, 0.2));

        assert!((moved.landmark(INDEX_TIP).x - 0.1).abs() < 1e-12);
        assert!((moved.landmark(INDEX_TIP).y - 0.2).abs() < 1e-12);
        assert!((moved.landmark(WRIST).x - 0.2).abs() < 1e-12);
        assert!((moved.landmark(WRIST).y - 0.4).abs() < 1e-12);
    }
}
