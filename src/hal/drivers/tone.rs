use anyhow::{anyhow, bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::warn;
use std::f32::consts::TAU;
use std::thread;
use std::time::Duration;

use crate::hal::traits::CueSink;

/// Plays each cue as a short sine tone on the default output device.
///
/// The stream is opened and closed per cue on the calling thread, so
/// overlapping cues each get their own stream.
pub struct ToneCueSink {
    duration: Duration,
    volume: f32,
}

impl ToneCueSink {
    pub fn new() -> Self {
        Self {
            duration: Duration::from_millis(120),
            volume: 0.2,
        }
    }
}

impl Default for ToneCueSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Pitch in Hz used for a cue
pub fn tone_frequency(cue: &str) -> f32 {
    match cue {
        "click" => 880.0,
        "right_click" => 660.0,
        "scroll_up" => 988.0,
        "scroll_down" => 494.0,
        "swipe_left" | "swipe_right" => 587.0,
        "swipe_up" | "swipe_down" => 698.0,
        "app_switch" => 784.0,
        "volume_up" => 1047.0,
        "volume_down" => 523.0,
        "zoom_in" => 1175.0,
        "zoom_out" => 392.0,
        _ => 440.0,
    }
}

impl CueSink for ToneCueSink {
    fn play(&self, cue: &str) -> Result<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("No default audio output device"))?;

        let supported = device
            .default_output_config()
            .context("Failed to query output config")?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            bail!("Unsupported output sample format {:?}", supported.sample_format());
        }

        let config: cpal::StreamConfig = supported.into();
        let channels = config.channels as usize;
        let step = TAU * tone_frequency(cue) / config.sample_rate.0 as f32;
        let volume = self.volume;
        let mut phase = 0.0f32;

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(channels) {
                        let sample = phase.sin() * volume;
                        phase = (phase + step) % TAU;
                        for out in frame.iter_mut() {
                            *out = sample;
                        }
                    }
                },
                |err| warn!("Audio cue stream error: {}", err),
                None,
            )
            .context("Failed to build cue output stream")?;

        stream.play().context("Failed to start cue output stream")?;
        thread::sleep(self.duration);
        Ok(())
    }
}
