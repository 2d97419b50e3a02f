use handcue::core::ActionKind;
use handcue::gesture::{find_action, GestureCode, MappingRule, MappingTable};

fn code(bits: [u8; 5]) -> GestureCode {
    GestureCode::from_bits(&bits).unwrap()
}

#[test]
fn test_first_duplicate_wins() {
    let table = MappingTable::new(vec![
        MappingRule::new(code([0, 1, 0, 0, 0]), ActionKind::LeftClick),
        MappingRule::new(code([0, 1, 0, 0, 0]), ActionKind::MoveCursor),
    ]);

    assert_eq!(table.find_action(code([0, 1, 0, 0, 0])), Some(ActionKind::LeftClick));
}

#[test]
fn test_order_decides_not_action() {
    let rules = vec![
        MappingRule::new(code([1, 1, 1, 1, 1]), ActionKind::ZoomOut),
        MappingRule::new(code([0, 1, 1, 0, 0]), ActionKind::RightClick),
        MappingRule::new(code([1, 1, 1, 1, 1]), ActionKind::ZoomIn),
    ];

    assert_eq!(find_action(&rules, code([1, 1, 1, 1, 1])), Some(ActionKind::ZoomOut));
    assert_eq!(find_action(&rules, code([0, 1, 1, 0, 0])), Some(ActionKind::RightClick));
}

#[test]
fn test_no_match() {
    let table: MappingTable =
        vec![MappingRule::new(code([0, 1, 0, 0, 0]), ActionKind::MoveCursor)]
            .into_iter()
            .collect();

    assert_eq!(table.find_action(code([0, 0, 0, 0, 0])), None);
    assert_eq!(table.find_action(code([1, 1, 0, 0, 0])), None);
    assert_eq!(find_action(&[], code([0, 1, 0, 0, 0])), None);
}

#[test]
fn test_rule_json_shape() {
    let rule: MappingRule = serde_json::from_value(serde_json::json!({
        "gesture": [0, 1, 1, 0, 0],
        "action": "swipe_left"
    }))
    .unwrap();

    assert_eq!(rule.gesture, code([0, 1, 1, 0, 0]));
    assert_eq!(rule.action, ActionKind::SwipeLeft);
}

#[test]
fn test_unknown_action_rejected() {
    let parsed = serde_json::from_value::<MappingRule>(serde_json::json!({
        "gesture": [0, 1, 1, 0, 0],
        "action": "launch_rocket"
    }));
    assert!(parsed.is_err());
}
