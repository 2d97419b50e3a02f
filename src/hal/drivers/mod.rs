pub mod logging;
pub mod tone;

pub use logging::{LogCueSink, LoggingExecutor};
pub use tone::{tone_frequency, ToneCueSink};
