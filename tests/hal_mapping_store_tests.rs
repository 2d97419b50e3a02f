use anyhow::Result;
use handcue::core::ActionKind;
use handcue::gesture::{GestureCode, MappingTable};
use handcue::hal::{parse_mappings, JsonMappingStore, MappingStore};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("gesture_mappings.json");
    fs::write(
        &path,
        r#"{"mappings": [
            {"gesture": [0, 1, 0, 0, 0], "action": "move_cursor"},
            {"gesture": [1, 1, 1, 1, 1], "action": "app_switch"}
        ]}"#,
    )?;

    let table: MappingTable = JsonMappingStore::new(&path).load().into_iter().collect();

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.find_action(GestureCode::from_bits(&[1, 1, 1, 1, 1])?),
        Some(ActionKind::AppSwitch)
    );

    Ok(())
}

#[test]
fn test_invalid_rules_skipped_in_order() -> Result<()> {
    let json = r#"{"mappings": [
        {"gesture": [0, 1, 0, 0, 0], "action": "left_click"},
        {"gesture": [0, 1, 0, 0], "action": "right_click"},
        {"gesture": [0, 1, 2, 0, 0], "action": "right_click"},
        {"gesture": [0, 1, 1, 0, 0], "action": "teleport"},
        {"action": "scroll_up"},
        {"gesture": [1, 1, 0, 0, 0], "action": "scroll_up"}
    ]}"#;

    let rules = parse_mappings(json)?;

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].action, ActionKind::LeftClick);
    assert_eq!(rules[1].action, ActionKind::ScrollUp);

    Ok(())
}

#[test]
fn test_malformed_file_loads_empty() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;

    let store = JsonMappingStore::new(&path);
    assert!(store.read_rules().is_err());
    assert!(store.load().is_empty());

    Ok(())
}

#[test]
fn test_default_path() {
    let store = JsonMappingStore::default();
    assert_eq!(store.path().to_str(), Some("gesture_mappings.json"));
}
