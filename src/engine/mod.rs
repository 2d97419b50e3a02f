pub mod cancel;
pub mod cooldown;
pub mod cursor;
pub mod pipeline;
pub mod runtime;
pub mod state;

pub use cancel::{CancellationCoordinator, CancellationFlag, HaltReason};
pub use cooldown::{should_fire, CooldownState, DEFAULT_ACTION_DELAY, SCROLL_COOLDOWN};
pub use cursor::{CursorFilterState, DEFAULT_SMOOTHING};
pub use pipeline::{FrameOutcome, FramePipeline, PipelineSettings};
pub use runtime::{GestureRuntime, RunReport};
pub use state::{RunState, StopReason};
