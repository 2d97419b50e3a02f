use serde::{Deserialize, Serialize};

use super::Landmark;

/// Pointer position in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (f64, f64) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

/// Display resolution as reported by the action executor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

impl DisplaySize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a normalized landmark onto whole display pixels (truncating)
    pub fn project(&self, landmark: Landmark) -> Position {
        Position {
            x: (landmark.x * self.width as f64).trunc(),
            y: (landmark.y * self.height as f64).trunc(),
        }
    }
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_truncates() {
        let display = DisplaySize::new(1920, 1080);
        let p = display.project(Landmark::new(0.5004, 0.2509));
        assert_eq!(p, Position::new(960.0, 270.0));
    }
}
