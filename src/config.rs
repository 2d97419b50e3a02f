use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::engine::cooldown::DEFAULT_ACTION_DELAY;
use crate::engine::cursor::DEFAULT_SMOOTHING;
use crate::hal::{CuePolicy, DEFAULT_MAPPINGS_FILE};

pub const SCROLL_SPEED_RANGE: RangeInclusive<i32> = 10..=100;
pub const ACTION_DELAY_RANGE: RangeInclusive<f64> = 0.1..=2.0;

/// Per-run settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Scroll distance per scroll action
    pub scroll_speed: i32,

    /// Cooldown between discrete actions, in seconds
    pub action_delay_secs: f64,

    /// Cursor smoothing divisor; larger is steadier but laggier
    pub smoothing: f64,

    pub cue_policy: CuePolicy,

    /// Play synthesized tones; otherwise cues are only logged
    pub audio_enabled: bool,

    pub mappings_path: PathBuf,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 40,
            action_delay_secs: DEFAULT_ACTION_DELAY.as_secs_f64(),
            smoothing: DEFAULT_SMOOTHING,
            cue_policy: CuePolicy::default(),
            audio_enabled: true,
            mappings_path: PathBuf::from(DEFAULT_MAPPINGS_FILE),
        }
    }
}

impl ControlConfig {
    /// Load from a JSON file and clamp out-of-range values
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ControlConfig =
            serde_json::from_str(json).context("Failed to parse config JSON")?;
        Ok(config.validated())
    }

    /// Clamp every tunable into its supported range
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        let speed = self
            .scroll_speed
            .clamp(*SCROLL_SPEED_RANGE.start(), *SCROLL_SPEED_RANGE.end());
        if speed != self.scroll_speed {
            warn!("scroll_speed {} out of range, using {}", self.scroll_speed, speed);
            self.scroll_speed = speed;
        }

        if !self.action_delay_secs.is_finite() {
            warn!("action_delay_secs is not a number, using {}", defaults.action_delay_secs);
            self.action_delay_secs = defaults.action_delay_secs;
        } else {
            let delay = self
                .action_delay_secs
                .clamp(*ACTION_DELAY_RANGE.start(), *ACTION_DELAY_RANGE.end());
            if delay != self.action_delay_secs {
                warn!("action_delay_secs {} out of range, using {}", self.action_delay_secs, delay);
                self.action_delay_secs = delay;
            }
        }

        if !self.smoothing.is_finite() || self.smoothing < 1.0 {
            warn!("smoothing {} must be at least 1, using {}", self.smoothing, defaults.smoothing);
            self.smoothing = defaults.smoothing;
        }

        self
    }

    pub fn action_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.action_delay_secs).unwrap_or(DEFAULT_ACTION_DELAY)
    }
}
