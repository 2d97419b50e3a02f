use handcue::core::{ActionKind, DisplaySize, InputCommand, MouseButton, PoseFrame, Position};
use handcue::engine::{
    CancellationCoordinator, CancellationFlag, FrameOutcome, FramePipeline, HaltReason,
    PipelineSettings,
};
use handcue::gesture::{GestureCode, MappingRule, MappingTable};
use handcue::hal::mock::{synthetic_hand, synthetic_hand_at, RecordingAudio, RecordingExecutor};
use std::sync::Arc;
use std::time::Duration;

fn code(bits: [u8; 5]) -> GestureCode {
    GestureCode::from_bits(&bits).unwrap()
}

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

struct Harness {
    pipeline: FramePipeline,
    executor: RecordingExecutor,
    audio: RecordingAudio,
    flag: CancellationFlag,
}

fn harness(rules: Vec<MappingRule>) -> Harness {
    let executor = RecordingExecutor::new(DisplaySize::new(1400, 700));
    let audio = RecordingAudio::new();
    let flag = CancellationFlag::new();

    let pipeline = FramePipeline::new(
        MappingTable::new(rules),
        PipelineSettings::default(),
        CancellationCoordinator::new(flag.clone()),
        Box::new(executor.clone()),
        Arc::new(audio.clone()),
    )
    .unwrap();

    Harness {
        pipeline,
        executor,
        audio,
        flag,
    }
}

fn frame_with(gesture: GestureCode, at: f64, seq: u64) -> PoseFrame {
    PoseFrame::new(secs(at), seq).with_hand(synthetic_hand(gesture))
}

#[test]
fn test_click_fires_then_cools_down() {
    let pointer = code([0, 1, 0, 0, 0]);
    let mut h = harness(vec![MappingRule::new(pointer, ActionKind::LeftClick)]);

    assert_eq!(
        h.pipeline.process_frame(&frame_with(pointer, 0.0, 0)),
        FrameOutcome::Fired(ActionKind::LeftClick)
    );
    assert_eq!(h.executor.commands(), vec![InputCommand::Click(MouseButton::Left)]);
    assert_eq!(h.audio.cues(), vec!["click"]);

    assert_eq!(
        h.pipeline.process_frame(&frame_with(pointer, 0.3, 1)),
        FrameOutcome::Suppressed(ActionKind::LeftClick)
    );
    assert_eq!(h.executor.len(), 1);
    assert_eq!(h.audio.cues().len(), 1);

    assert_eq!(
        h.pipeline.process_frame(&frame_with(pointer, 0.8, 2)),
        FrameOutcome::Fired(ActionKind::LeftClick)
    );
    assert_eq!(h.executor.len(), 2);
    assert_eq!(h.audio.cues(), vec!["click", "click"]);
}

#[test]
fn test_cancellation_blocks_all_output() {
    let pointer = code([0, 1, 0, 0, 0]);
    let mut h = harness(vec![MappingRule::new(pointer, ActionKind::LeftClick)]);

    h.flag.cancel();

    for seq in 0..5 {
        let outcome = h.pipeline.process_frame(&frame_with(pointer, 10.0 + seq as f64, seq));
        assert_eq!(outcome, FrameOutcome::Halted(HaltReason::VoiceCommand));
    }
    assert!(h.executor.is_empty());
    assert!(h.audio.cues().is_empty());
    assert_eq!(h.pipeline.metrics().frames_processed(), 0);
}

#[test]
fn test_exit_key_halts_for_good() {
    let pointer = code([0, 1, 0, 0, 0]);
    let mut h = harness(vec![MappingRule::new(pointer, ActionKind::LeftClick)]);

    let exit = frame_with(pointer, 0.0, 0).with_exit_requested();
    assert_eq!(h.pipeline.process_frame(&exit), FrameOutcome::Halted(HaltReason::ExitKey));

    // Later frames without the key stay halted
    assert_eq!(
        h.pipeline.process_frame(&frame_with(pointer, 5.0, 1)),
        FrameOutcome::Halted(HaltReason::ExitKey)
    );
    assert!(h.executor.is_empty());
    assert_eq!(h.pipeline.halted(), Some(HaltReason::ExitKey));
}

#[test]
fn test_no_hand_and_unmatched_are_silent() {
    let mut h = harness(vec![MappingRule::new(code([0, 1, 0, 0, 0]), ActionKind::LeftClick)]);

    assert_eq!(h.pipeline.process_frame(&PoseFrame::new(secs(0.0), 0)), FrameOutcome::NoHand);

    let fist = code([0, 0, 0, 0, 0]);
    assert_eq!(
        h.pipeline.process_frame(&frame_with(fist, 1.0, 1)),
        FrameOutcome::Unmatched(fist)
    );

    assert!(h.executor.is_empty());
    assert!(h.audio.cues().is_empty());
    assert_eq!(h.pipeline.cooldown().last_action_time(), None);
}

#[test]
fn test_cursor_moves_every_frame_without_cue() {
    let pointer = code([0, 1, 0, 0, 0]);
    let mut h = harness(vec![MappingRule::new(pointer, ActionKind::MoveCursor)]);

    for seq in 0..3 {
        let frame = PoseFrame::new(secs(seq as f64 * 0.01), seq)
            .with_hand(synthetic_hand_at(pointer, 0.5, 0.0));
        assert!(matches!(h.pipeline.process_frame(&frame), FrameOutcome::CursorMoved(_)));
    }

    // Target (700, 0) on a 1400x700 display, smoothing 7
    let commands = h.executor.commands();
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], InputCommand::MoveTo(Position::new(100.0, 0.0)));
    match &commands[2] {
        InputCommand::MoveTo(p) => assert!(p.x > 100.0 && p.x < 700.0),
        other => panic!("unexpected command {:?}", other),
    }
    assert!(h.audio.cues().is_empty());
    assert_eq!(h.pipeline.cooldown().last_action_time(), None);
}

#[test]
fn test_cursor_motion_does_not_reset_click_cooldown() {
    let pointer = code([0, 1, 0, 0, 0]);
    let pinch = code([0, 1, 1, 0, 0]);
    let mut h = harness(vec![
        MappingRule::new(pointer, ActionKind::MoveCursor),
        MappingRule::new(pinch, ActionKind::LeftClick),
    ]);

    assert_eq!(
        h.pipeline.process_frame(&frame_with(pinch, 0.0, 0)),
        FrameOutcome::Fired(ActionKind::LeftClick)
    );
    assert!(matches!(
        h.pipeline.process_frame(&frame_with(pointer, 0.2, 1)),
        FrameOutcome::CursorMoved(_)
    ));
    assert_eq!(
        h.pipeline.process_frame(&frame_with(pinch, 0.4, 2)),
        FrameOutcome::Suppressed(ActionKind::LeftClick)
    );
}

#[test]
fn test_last_hand_wins() {
    let pointer = code([0, 1, 0, 0, 0]);
    let palm = code([1, 1, 1, 1, 1]);
    let mut h = harness(vec![
        MappingRule::new(pointer, ActionKind::LeftClick),
        MappingRule::new(palm, ActionKind::AppSwitch),
    ]);

    let frame = PoseFrame::new(secs(0.0), 0)
        .with_hand(synthetic_hand(pointer))
        .with_hand(synthetic_hand(palm));

    assert_eq!(h.pipeline.process_frame(&frame), FrameOutcome::Fired(ActionKind::AppSwitch));
    assert_eq!(h.executor.len(), 1);
    assert_eq!(h.audio.cues(), vec!["app_switch"]);
}

#[test]
fn test_scroll_uses_configured_speed() {
    let two = code([1, 1, 0, 0, 0]);
    let executor = RecordingExecutor::default();
    let settings = PipelineSettings {
        scroll_speed: 25,
        ..PipelineSettings::default()
    };
    let mut pipeline = FramePipeline::new(
        MappingTable::new(vec![MappingRule::new(two, ActionKind::ScrollDown)]),
        settings,
        CancellationCoordinator::default(),
        Box::new(executor.clone()),
        Arc::new(RecordingAudio::new()),
    )
    .unwrap();

    pipeline.process_frame(&frame_with(two, 0.0, 0));
    pipeline.process_frame(&frame_with(two, 0.4, 1));
    pipeline.process_frame(&frame_with(two, 0.6, 2));

    assert_eq!(
        executor.commands(),
        vec![InputCommand::Scroll(-25), InputCommand::Scroll(-25)]
    );
}

#[test]
fn test_empty_table_rejected() {
    let result = FramePipeline::new(
        MappingTable::default(),
        PipelineSettings::default(),
        CancellationCoordinator::default(),
        Box::new(RecordingExecutor::default()),
        Arc::new(RecordingAudio::new()),
    );
    assert!(result.is_err());
}

#[test]
fn test_metrics_follow_outcomes() {
    let pointer = code([0, 1, 0, 0, 0]);
    let mut h = harness(vec![MappingRule::new(pointer, ActionKind::LeftClick)]);

    h.pipeline.process_frame(&frame_with(pointer, 0.0, 0));
    h.pipeline.process_frame(&frame_with(pointer, 0.1, 1));
    h.pipeline.process_frame(&PoseFrame::new(secs(0.2), 2));

    let snapshot = h.pipeline.metrics().snapshot();
    assert_eq!(snapshot.frames_processed, 3);
    assert_eq!(snapshot.actions_fired, 1);
    assert_eq!(snapshot.actions_suppressed, 1);
    assert_eq!(snapshot.frames_without_hand, 1);
}
