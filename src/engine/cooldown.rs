use std::time::Duration;

use crate::core::{ActionKind, CooldownClass};

/// Minimum spacing between two scroll actions; not user-configurable
pub const SCROLL_COOLDOWN: Duration = Duration::from_millis(500);

/// Default minimum spacing between two discrete actions
pub const DEFAULT_ACTION_DELAY: Duration = Duration::from_millis(700);

/// Last fire times, as offsets from the start of the run.
///
/// `None` means the class has never fired, so its first action always passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooldownState {
    last_action_time: Option<Duration>,
    last_scroll_time: Option<Duration>,
}

impl CooldownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State as if a discrete action fired at `at`
    pub fn with_last_action(mut self, at: Duration) -> Self {
        self.last_action_time = Some(at);
        self
    }

    /// State as if a scroll action fired at `at`
    pub fn with_last_scroll(mut self, at: Duration) -> Self {
        self.last_scroll_time = Some(at);
        self
    }

    pub fn last_action_time(&self) -> Option<Duration> {
        self.last_action_time
    }

    pub fn last_scroll_time(&self) -> Option<Duration> {
        self.last_scroll_time
    }
}

/// Decide whether `action` may fire at `now`, advancing its timer if so.
///
/// A suppressed action leaves `state` untouched. A timestamp earlier than
/// the last fire never passes.
pub fn should_fire(
    action: ActionKind,
    now: Duration,
    state: &mut CooldownState,
    configured_delay: Duration,
) -> bool {
    match action.cooldown_class() {
        CooldownClass::Continuous => true,
        CooldownClass::Scroll => try_advance(&mut state.last_scroll_time, now, SCROLL_COOLDOWN),
        CooldownClass::Discrete => try_advance(&mut state.last_action_time, now, configured_delay),
    }
}

fn try_advance(last: &mut Option<Duration>, now: Duration, threshold: Duration) -> bool {
    let ready = match *last {
        None => true,
        Some(prev) => now
            .checked_sub(prev)
            .map_or(false, |elapsed| elapsed > threshold),
    };
    if ready {
        *last = Some(now);
    }
    ready
}
