pub mod audio;
pub mod executor;
pub mod pose;
pub mod voice;

pub use audio::{RecordingAudio, RecordingCueSink};
pub use executor::RecordingExecutor;
pub use pose::{synthetic_hand, synthetic_hand_at, ScriptedPoseSource};
pub use voice::ScriptedVoiceSource;
