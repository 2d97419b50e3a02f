use anyhow::Result;
use handcue::config::ControlConfig;
use handcue::core::PoseFrame;
use handcue::engine::GestureRuntime;
use handcue::gesture::MappingTable;
use handcue::hal::drivers::{LogCueSink, LoggingExecutor, ToneCueSink};
use handcue::hal::mock::{synthetic_hand_at, ScriptedPoseSource, ScriptedVoiceSource};
use handcue::hal::{CueDispatcher, CueSink, JsonMappingStore, MappingStore};
use log::info;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const FRAMES_PER_GESTURE: u64 = 45;

/// Walk through every mapped gesture in turn, sweeping the fingertip
/// diagonally so cursor rules visibly move.
fn demo_script(table: &MappingTable, rounds: usize) -> Vec<PoseFrame> {
    let mut frames = Vec::new();
    let mut seq = 0u64;

    for _ in 0..rounds {
        for rule in table.rules() {
            for step in 0..FRAMES_PER_GESTURE {
                let t = step as f64 / FRAMES_PER_GESTURE as f64;
                let hand = synthetic_hand_at(rule.gesture, 0.2 + 0.6 * t, 0.3 + 0.4 * t);
                frames.push(PoseFrame::new(FRAME_INTERVAL * seq as u32, seq).with_hand(hand));
                seq += 1;
            }
            // Hand leaves the frame between gestures
            frames.push(PoseFrame::new(FRAME_INTERVAL * seq as u32, seq));
            seq += 1;
        }
    }

    frames
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ControlConfig::load(Path::new(&path))?,
        None => ControlConfig::default(),
    };

    let table = MappingTable::new(JsonMappingStore::new(&config.mappings_path).load());
    if table.is_empty() {
        info!("No gesture mappings found. Exiting.");
        return Ok(());
    }
    for rule in table.rules() {
        info!("  {} -> {}", rule.gesture, rule.action);
    }

    let sink: Arc<dyn CueSink> = if config.audio_enabled {
        Arc::new(ToneCueSink::new())
    } else {
        Arc::new(LogCueSink)
    };
    let audio = Arc::new(CueDispatcher::new(sink, config.cue_policy));

    let mut runtime = GestureRuntime::new(
        &config,
        table.clone(),
        Box::new(LoggingExecutor::default()),
        audio,
    )?
    .with_voice(Box::new(
        ScriptedVoiceSource::new()
            .then_say(Duration::from_secs(2), "scroll a bit")
            .then_say(Duration::from_secs(4), "please exit"),
    ));

    let mut source = ScriptedPoseSource::new(demo_script(&table, 3)).with_interval(FRAME_INTERVAL);

    info!("Say 'exit' to quit.");
    let report = runtime.run(&mut source).await?;
    info!(
        "Exiting gesture control ({:?}, {} actions fired)",
        report.stop_reason, report.metrics.actions_fired
    );

    Ok(())
}
