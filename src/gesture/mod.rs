pub mod classifier;
pub mod mapping;

pub use classifier::{classify, Finger, GestureCode, FINGER_COUNT};
pub use mapping::{find_action, MappingRule, MappingTable};
