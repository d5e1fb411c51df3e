//! Integration tests for the AgentCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use wallplast_editor_lib::command::{execute_json, execute_json_batch};
use wallplast_editor_lib::harness::TestHarness;

#[test]
fn test_command_add_block() {
    let mut h = TestHarness::new();

    let json = r#"{"command": "add_block", "block": {"name": "pillar", "position": {"x": 1, "y": 2, "z": 3}, "size": {"x": 0.5, "y": 4, "z": 0.5}}}"#;

    let resp = execute_json(&mut h, json).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.as_ref().unwrap()["index"], 0);
    assert_eq!(h.block_count(), 1);
    assert_eq!(h.block(0).name(), "pillar");
}

#[test]
fn test_command_add_block_lenient_fields() {
    let mut h = TestHarness::new();

    let json = r#"{"command": "add_block", "block": {"position": [1, 2, 3], "size": {"x": "wide"}}}"#;

    let resp = execute_json(&mut h, json).unwrap();
    assert!(resp.success);
    let block = h.block(0);
    assert_eq!(block.position(shared::Axis::X), 0.0);
    assert_eq!(block.size(shared::Axis::X), 1.0);
    assert_eq!(block.material(), "gray");
}

#[test]
fn test_command_cycle_select_via_clicks() {
    let mut h = TestHarness::new();
    let batch = r#"[
        {"command": "add_block", "block": {"name": "A"}},
        {"command": "add_block", "block": {"name": "B"}},
        {"command": "click", "view": "front", "at": [200, 150]},
        {"command": "click", "view": "front", "at": [200, 150]},
        {"command": "click", "view": "front", "at": [200, 150]}
    ]"#;

    let resps = execute_json_batch(&mut h, batch).unwrap();
    assert_eq!(resps.len(), 5);
    let picked: Vec<u64> = resps[2..]
        .iter()
        .map(|r| r.data.as_ref().unwrap()["selected"]["index"].as_u64().unwrap())
        .collect();
    assert_eq!(picked, vec![0, 1, 0]);
}

#[test]
fn test_command_scroll_and_pan() {
    let mut h = TestHarness::new();

    let resp = execute_json(&mut h, r#"{"command": "scroll", "view": "right", "ticks": -1}"#).unwrap();
    let scale = resp.data.unwrap()["scale"].as_f64().unwrap();
    assert!((scale - 20.0 / 1.1).abs() < 1e-9);

    let resp = execute_json(
        &mut h,
        r#"{"command": "pan", "view": "top", "from": [0, 0], "to": [40, 0]}"#,
    )
    .unwrap();
    let center = &resp.data.unwrap()["center"];
    assert_eq!(center[0], -2.0);
    assert_eq!(center[1], 0.0);
}

#[test]
fn test_command_rotate_via_drag_handle() {
    let mut h = TestHarness::new();
    let batch = r#"[
        {"command": "add_block", "block": {"name": "door"}},
        {"command": "set_mode", "mode": "rotate"},
        {"command": "click", "view": "front", "at": [200, 150]},
        {"command": "drag_handle", "view": "front", "handle": "ring", "by": [-50, -50], "steps": 8}
    ]"#;

    let resps = execute_json_batch(&mut h, batch).unwrap();
    assert!(resps.iter().all(|r| r.success), "{resps:?}");

    // Ring grip at 0°, dragged to 90° around the block center
    let z = h.block(0).rotation(shared::Axis::Z);
    assert!((z - 90.0).abs() < 1e-3, "rotation = {z}");
}

#[test]
fn test_command_key_in_rotate_mode_is_noop() {
    let mut h = TestHarness::new();
    let batch = r#"[
        {"command": "add_block", "block": {"name": "a"}},
        {"command": "click", "view": "top", "at": [200, 150]},
        {"command": "set_mode", "mode": "rotate"},
        {"command": "key", "key": "right"}
    ]"#;

    let resps = execute_json_batch(&mut h, batch).unwrap();
    assert_eq!(resps[3].data.as_ref().unwrap()["changed"], false);
    assert_eq!(h.block(0).position(shared::Axis::X), 0.0);
}

#[test]
fn test_command_clear_selection_hides_gizmo() {
    let mut h = TestHarness::new();
    let batch = r#"[
        {"command": "add_block", "block": {"name": "a"}},
        {"command": "click", "view": "top", "at": [200, 150]},
        {"command": "clear_selection"},
        {"command": "drag_handle", "view": "top", "handle": "x", "by": [20, 0]}
    ]"#;

    let resps = execute_json_batch(&mut h, batch).unwrap();
    assert!(resps[2].success);
    assert!(!resps[3].success);
    assert!(resps[3].error.as_ref().unwrap().contains("top"));
}

#[test]
fn test_command_export_preserves_unknown_keys() {
    let mut h = TestHarness::new();
    let load = r#"{"command": "load_map", "map": {"blocks": [{"name": "lamp", "light": {"radius": 4}}]}}"#;
    assert!(execute_json(&mut h, load).unwrap().success);

    let resp = execute_json(&mut h, r#"{"command": "export_map"}"#).unwrap();
    let json = resp.data.unwrap()["map_json"].as_str().unwrap().to_string();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["blocks"][0]["light"]["radius"], 4);
}

#[test]
fn test_command_batch_invalid() {
    let mut h = TestHarness::new();
    let err = execute_json_batch(&mut h, r#"[{"command": "explode"}]"#).unwrap_err();
    assert!(err.starts_with("Invalid commands JSON"));
    assert_eq!(h.block_count(), 0);
}
