use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Write-once stop signal shared between the voice listener and the run loop.
///
/// Clones share the same flag. Once set it stays set.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    inner: Arc<FlagInner>,
}

#[derive(Debug, Default)]
struct FlagInner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Returns true only for the call that flipped it.
    pub fn cancel(&self) -> bool {
        let first = !self.inner.cancelled.swap(true, Ordering::AcqRel);
        if first {
            self.inner.notify.notify_waiters();
        }
        first
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once the flag is set
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register before checking so a concurrent cancel() is not missed
            notified.as_mut().enable();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

/// Why a run stopped before its pose source ran dry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// Exit phrase heard by the voice listener
    VoiceCommand,
    /// Exit key reported by the display surface
    ExitKey,
}

/// Merges the shared cancellation flag with the per-frame exit key
#[derive(Debug, Clone, Default)]
pub struct CancellationCoordinator {
    flag: CancellationFlag,
}

impl CancellationCoordinator {
    pub fn new(flag: CancellationFlag) -> Self {
        Self { flag }
    }

    pub fn flag(&self) -> &CancellationFlag {
        &self.flag
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled()
    }

    /// Halt reason for the current frame, voice taking precedence
    pub fn check(&self, exit_key: bool) -> Option<HaltReason> {
        if self.flag.is_cancelled() {
            Some(HaltReason::VoiceCommand)
        } else if exit_key {
            Some(HaltReason::ExitKey)
        } else {
            None
        }
    }
}
