use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::engine::CancellationFlag;
use crate::hal::{VoiceError, VoiceSource};

/// Words that end the run when heard anywhere in an utterance
pub const EXIT_KEYWORDS: [&str; 3] = ["exit", "quit", "close"];

/// Case-insensitive substring match against [`EXIT_KEYWORDS`]
pub fn is_exit_phrase(utterance: &str) -> bool {
    let lower = utterance.to_lowercase();
    EXIT_KEYWORDS.iter().any(|word| lower.contains(word))
}

/// How the listener loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerExit {
    /// This listener heard an exit phrase and set the flag
    ExitHeard,
    /// The flag was already set by someone else
    AlreadyCancelled,
    /// The voice source shut down
    SourceClosed,
}

/// Listen until an exit phrase is heard, the flag is set elsewhere, or the
/// source closes. Recoverable errors never touch the flag.
pub async fn listen_for_exit(
    mut source: Box<dyn VoiceSource>,
    flag: CancellationFlag,
) -> ListenerExit {
    while !flag.is_cancelled() {
        match source.listen().await {
            Ok(utterance) => {
                info!("Voice command detected: {}", utterance);
                if is_exit_phrase(&utterance) {
                    info!("Exit requested by voice");
                    flag.cancel();
                    return ListenerExit::ExitHeard;
                }
            }
            Err(VoiceError::Closed) => {
                info!("Voice source closed, no longer listening");
                return ListenerExit::SourceClosed;
            }
            Err(e @ (VoiceError::Timeout | VoiceError::Unintelligible)) => {
                debug!("Voice: {}", e);
            }
            Err(e) => {
                warn!("{}", e);
            }
        }
    }
    ListenerExit::AlreadyCancelled
}

/// Run [`listen_for_exit`] as an independent task
pub fn spawn_exit_listener(
    source: Box<dyn VoiceSource>,
    flag: CancellationFlag,
) -> JoinHandle<ListenerExit> {
    tokio::spawn(listen_for_exit(source, flag))
}
