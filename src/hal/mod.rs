pub mod cue;
pub mod drivers;
pub mod mapping_store;
pub mod mock;
pub mod traits;
pub mod types;

pub use cue::CueDispatcher;
pub use mapping_store::{parse_mappings, JsonMappingStore, DEFAULT_MAPPINGS_FILE};
pub use traits::{ActionExecutor, AudioFeedback, CueSink, MappingStore, PoseSource, VoiceSource};
pub use types::{CuePolicy, VoiceError};
