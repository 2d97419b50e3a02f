use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, warn};
use std::sync::Arc;
use std::thread;

use super::traits::{AudioFeedback, CueSink};
use super::types::CuePolicy;
use crate::core::ActionKind;

/// Fire-and-forget front end over a blocking [`CueSink`].
///
/// Playback errors are logged on the player thread and never reported back.
pub struct CueDispatcher {
    sink: Arc<dyn CueSink>,
    mode: DispatchMode,
}

enum DispatchMode {
    Unbounded,
    LatestWins(Sender<&'static str>),
}

impl CueDispatcher {
    pub fn new(sink: Arc<dyn CueSink>, policy: CuePolicy) -> Self {
        let mode = match policy {
            CuePolicy::Unbounded => DispatchMode::Unbounded,
            CuePolicy::LatestWins => {
                let (tx, rx) = unbounded();
                spawn_player(sink.clone(), rx);
                DispatchMode::LatestWins(tx)
            }
        };
        Self { sink, mode }
    }

    pub fn policy(&self) -> CuePolicy {
        match self.mode {
            DispatchMode::Unbounded => CuePolicy::Unbounded,
            DispatchMode::LatestWins(_) => CuePolicy::LatestWins,
        }
    }
}

impl AudioFeedback for CueDispatcher {
    fn request(&self, action: ActionKind) {
        let Some(cue) = action.cue_name() else {
            return;
        };

        match &self.mode {
            DispatchMode::Unbounded => {
                let sink = self.sink.clone();
                let spawned = thread::Builder::new()
                    .name(format!("cue-{}", cue))
                    .spawn(move || play_logged(sink.as_ref(), cue));
                if let Err(e) = spawned {
                    warn!("Failed to spawn audio cue {}: {}", cue, e);
                }
            }
            DispatchMode::LatestWins(tx) => {
                // Player thread gone means nobody will ever play it
                let _ = tx.send(cue);
            }
        }
    }
}

fn spawn_player(sink: Arc<dyn CueSink>, rx: Receiver<&'static str>) {
    let spawned = thread::Builder::new()
        .name("cue-player".to_string())
        .spawn(move || {
            // Ends when the dispatcher (the only sender) is dropped
            while let Ok(mut cue) = rx.recv() {
                while let Ok(newer) = rx.try_recv() {
                    debug!("Dropping audio cue {} in favour of {}", cue, newer);
                    cue = newer;
                }
                play_logged(sink.as_ref(), cue);
            }
        });
    if let Err(e) = spawned {
        warn!("Failed to spawn audio cue player: {}", e);
    }
}

fn play_logged(sink: &dyn CueSink, cue: &str) {
    if let Err(e) = sink.play(cue) {
        warn!("Audio cue {} failed: {:#}", cue, e);
    }
}
