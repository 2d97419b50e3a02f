use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::cancel::HaltReason;

/// Why a completed run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    VoiceCommand,
    ExitKey,
    /// Pose source ended without error
    SourceExhausted,
}

impl From<HaltReason> for StopReason {
    fn from(reason: HaltReason) -> Self {
        match reason {
            HaltReason::VoiceCommand => StopReason::VoiceCommand,
            HaltReason::ExitKey => StopReason::ExitKey,
        }
    }
}

/// Run lifecycle states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Running {
        #[serde(skip)]
        start_time: Option<Instant>,
    },
    Completed {
        #[serde(skip)]
        duration: Option<Duration>,
        reason: StopReason,
    },
    Error {
        error_msg: String,
    },
}

impl RunState {
    /// Check if transition from current state to target state is valid
    pub fn can_transition_to(&self, target: &RunState) -> bool {
        use RunState::*;

        matches!(
            (self, target),
            (Idle, Running { .. })
                | (Running { .. }, Completed { .. })
                | (Running { .. }, Error { .. })
                | (Completed { .. }, Idle)
                | (Error { .. }, Idle)
        )
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Running { .. } => "Running",
            Self::Completed { .. } => "Completed",
            Self::Error { .. } => "Error",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        let idle = RunState::Idle;
        let running = RunState::Running { start_time: None };

        assert!(idle.can_transition_to(&running));
        assert!(!running.can_transition_to(&idle));
        assert!(running.is_running());
        assert!(!idle.is_running());
    }

    #[test]
    fn test_completed_cannot_resume() {
        let completed = RunState::Completed {
            duration: None,
            reason: StopReason::ExitKey,
        };

        assert!(!completed.can_transition_to(&RunState::Running { start_time: None }));
        assert!(completed.can_transition_to(&RunState::Idle));
    }

    #[test]
    fn test_idle_cannot_fail() {
        let error = RunState::Error {
            error_msg: "camera".to_string(),
        };
        assert!(!RunState::Idle.can_transition_to(&error));
    }
}
