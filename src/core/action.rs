use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Position;

/// Everything a gesture can be mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    MoveCursor,
    LeftClick,
    RightClick,
    ScrollUp,
    ScrollDown,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
    AppSwitch,
    VolumeUp,
    VolumeDown,
    ZoomIn,
    ZoomOut,
}

/// Which debounce rule applies to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownClass {
    /// Fires on every matching frame
    Continuous,
    /// Fixed short cooldown shared by both scroll directions
    Scroll,
    /// User-configured cooldown shared by all remaining actions
    Discrete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Alt,
    Tab,
    Ctrl,
    Plus,
    Minus,
    VolumeUp,
    VolumeDown,
}

/// Concrete OS-level effect handed to the action executor
#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    MoveTo(Position),
    Click(MouseButton),
    /// Positive scrolls up, negative scrolls down
    Scroll(i32),
    Press(Key),
    /// Keys held together, in press order
    Hotkey(Vec<Key>),
}

impl ActionKind {
    pub const ALL: [ActionKind; 14] = [
        ActionKind::MoveCursor,
        ActionKind::LeftClick,
        ActionKind::RightClick,
        ActionKind::ScrollUp,
        ActionKind::ScrollDown,
        ActionKind::SwipeLeft,
        ActionKind::SwipeRight,
        ActionKind::SwipeUp,
        ActionKind::SwipeDown,
        ActionKind::AppSwitch,
        ActionKind::VolumeUp,
        ActionKind::VolumeDown,
        ActionKind::ZoomIn,
        ActionKind::ZoomOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MoveCursor => "move_cursor",
            Self::LeftClick => "left_click",
            Self::RightClick => "right_click",
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",
            Self::SwipeLeft => "swipe_left",
            Self::SwipeRight => "swipe_right",
            Self::SwipeUp => "swipe_up",
            Self::SwipeDown => "swipe_down",
            Self::AppSwitch => "app_switch",
            Self::VolumeUp => "volume_up",
            Self::VolumeDown => "volume_down",
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
        }
    }

    pub fn cooldown_class(&self) -> CooldownClass {
        match self {
            Self::MoveCursor => CooldownClass::Continuous,
            Self::ScrollUp | Self::ScrollDown => CooldownClass::Scroll,
            _ => CooldownClass::Discrete,
        }
    }

    /// Name of the audio cue played when this action fires
    pub fn cue_name(&self) -> Option<&'static str> {
        match self {
            Self::MoveCursor => None,
            Self::LeftClick => Some("click"),
            other => Some(other.as_str()),
        }
    }

    /// Input command for a discrete action; `None` for cursor motion,
    /// whose command carries the filtered position instead.
    pub fn command(&self, scroll_speed: i32) -> Option<InputCommand> {
        let command = match self {
            Self::MoveCursor => return None,
            Self::LeftClick => InputCommand::Click(MouseButton::Left),
            Self::RightClick => InputCommand::Click(MouseButton::Right),
            Self::ScrollUp => InputCommand::Scroll(scroll_speed),
            Self::ScrollDown => InputCommand::Scroll(-scroll_speed),
            Self::SwipeLeft => InputCommand::Press(Key::Left),
            Self::SwipeRight => InputCommand::Press(Key::Right),
            Self::SwipeUp => InputCommand::Press(Key::Up),
            Self::SwipeDown => InputCommand::Press(Key::Down),
            Self::AppSwitch => InputCommand::Hotkey(vec![Key::Alt, Key::Tab]),
            Self::VolumeUp => InputCommand::Press(Key::VolumeUp),
            Self::VolumeDown => InputCommand::Press(Key::VolumeDown),
            Self::ZoomIn => InputCommand::Hotkey(vec![Key::Ctrl, Key::Plus]),
            Self::ZoomOut => InputCommand::Hotkey(vec![Key::Ctrl, Key::Minus]),
        };
        Some(command)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown action: {}", s))
    }
}
