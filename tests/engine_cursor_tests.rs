use handcue::core::{DisplaySize, Position};
use handcue::engine::cursor::{target_for, update};
use handcue::engine::{CursorFilterState, DEFAULT_SMOOTHING};
use handcue::gesture::GestureCode;
use handcue::hal::mock::synthetic_hand_at;

#[test]
fn test_single_step() {
    let mut state = CursorFilterState::new();
    let p = update(Position::new(70.0, 0.0), &mut state, 7.0);

    assert_eq!(p, Position::new(10.0, 0.0));
    assert_eq!(state.position(), p);
}

#[test]
fn test_converges_without_overshoot() {
    let target = Position::new(700.0, -350.0);
    let mut state = CursorFilterState::new();
    let mut prev = state.position();

    for _ in 0..200 {
        let p = update(target, &mut state, DEFAULT_SMOOTHING);
        assert!(p.x >= prev.x && p.x <= target.x);
        assert!(p.y <= prev.y && p.y >= target.y);
        prev = p;
    }

    assert!((prev.x - target.x).abs() < 1e-6);
    assert!((prev.y - target.y).abs() < 1e-6);
}

#[test]
fn test_larger_factor_lags_more() {
    let target = Position::new(100.0, 100.0);
    let mut smooth = CursorFilterState::new();
    let mut snappy = CursorFilterState::new();

    let a = update(target, &mut smooth, 10.0);
    let b = update(target, &mut snappy, 2.0);

    assert!(a.x < b.x);
}

#[test]
fn test_factor_below_one_does_not_overshoot() {
    let mut state = CursorFilterState::starting_at(Position::new(10.0, 10.0));
    let p = update(Position::new(20.0, 0.0), &mut state, 0.25);
    assert_eq!(p, Position::new(20.0, 0.0));
}

#[test]
fn test_target_from_index_tip() {
    let code = GestureCode::from_bits(&[0, 1, 0, 0, 0]).unwrap();
    let pose = synthetic_hand_at(code, 0.25, 0.5);

    let target = target_for(&pose, DisplaySize::new(1280, 720));
    assert_eq!(target, Position::new(320.0, 360.0));
}
