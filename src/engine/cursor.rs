use crate::core::pose::INDEX_TIP;
use crate::core::{DisplaySize, HandPose, Position};

/// Default divisor of the cursor smoothing filter
pub const DEFAULT_SMOOTHING: f64 = 7.0;

/// Landmark whose position drives the cursor
pub const CURSOR_LANDMARK: usize = INDEX_TIP;

/// Last filtered cursor position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorFilterState {
    position: Position,
}

impl CursorFilterState {
    /// Filter starting at the display origin
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// One step of the exponential smoothing filter.
///
/// Each axis moves `1 / smoothing` of the way toward `target`. Factors below
/// 1 are treated as 1 so the output never overshoots.
pub fn update(target: Position, state: &mut CursorFilterState, smoothing: f64) -> Position {
    let smoothing = if smoothing.is_finite() {
        smoothing.max(1.0)
    } else {
        DEFAULT_SMOOTHING
    };
    let prev = state.position;
    let next = Position {
        x: prev.x + (target.x - prev.x) / smoothing,
        y: prev.y + (target.y - prev.y) / smoothing,
    };
    state.position = next;
    next
}

/// Raw cursor target for a pose on the given display
pub fn target_for(pose: &HandPose, display: DisplaySize) -> Position {
    display.project(pose.landmark(CURSOR_LANDMARK))
}
