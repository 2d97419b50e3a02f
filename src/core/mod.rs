pub mod action;
pub mod frame;
pub mod pose;
pub mod screen;

pub use action::{ActionKind, CooldownClass, InputCommand, Key, MouseButton};
pub use frame::PoseFrame;
pub use pose::{HandPose, Landmark, LANDMARK_COUNT};
pub use screen::{DisplaySize, Position};
