//! End-to-end tests for `switch-matrix channel`, `table`, `locate` and `layouts`.

mod fixtures;

use fixtures::*;

// ============================================================================
// channel
// ============================================================================

#[test]
fn test_channel_plain() {
    let dir = temp_config_dir();
    let output = run(
        &["channel", "--layout", "4x32", "--wiring", "M2L", "--row", "2", "--col", "5"],
        dir.path(),
    );

    assert_exit(&output, 0);
    assert_eq!(stdout(&output).trim(), "401");
}

#[test]
fn test_channel_short_flags() {
    let dir = temp_config_dir();
    let output = run(&["channel", "-l", "16x32", "-r", "15", "-c", "32"], dir.path());

    assert_exit(&output, 0);
    assert_eq!(stdout(&output).trim(), "832");
}

#[test]
fn test_channel_json() {
    let dir = temp_config_dir();
    let output = run(
        &["channel", "--layout", "4x64", "--wiring", "ML", "--row", "1", "--col", "1", "--json"],
        dir.path(),
    );

    assert_exit(&output, 0);
    let result = stdout_json(&output);
    assert_eq!(result["layout"], "4x64");
    assert_eq!(result["wiring"], "ML");
    assert_eq!(result["row"], 1);
    assert_eq!(result["col"], 1);
    assert_eq!(result["channel"], "165");
}

#[test]
fn test_channel_json_omits_wiring_for_plain_layouts() {
    let dir = temp_config_dir();
    let output = run(
        &["channel", "--layout", "4x128", "--row", "3", "--col", "10", "--json"],
        dir.path(),
    );

    assert_exit(&output, 0);
    let result = stdout_json(&output);
    assert_eq!(result["channel"], "510");
    assert!(result.get("wiring").is_none());
}

#[test]
fn test_channel_unknown_layout() {
    let dir = temp_config_dir();
    let output = run(&["channel", "--layout", "2x2", "--row", "1", "--col", "1"], dir.path());

    assert_exit(&output, 1);
    assert!(stderr(&output).contains("Unknown layout '2x2'"));
}

#[test]
fn test_channel_missing_wiring() {
    let dir = temp_config_dir();
    let output = run(&["channel", "--layout", "8x32", "--row", "1", "--col", "1"], dir.path());

    assert_exit(&output, 1);
    assert!(stderr(&output).contains("requires a wiring configuration"));
}

#[test]
fn test_channel_wrong_wiring() {
    let dir = temp_config_dir();
    let output = run(
        &["channel", "--layout", "4x32", "--wiring", "ML", "--row", "1", "--col", "1"],
        dir.path(),
    );

    assert_exit(&output, 1);
    assert!(stderr(&output).contains("not valid for layout 4x32"));
}

#[test]
fn test_channel_out_of_range() {
    let dir = temp_config_dir();
    let output = run(&["channel", "--layout", "8x64", "--row", "9", "--col", "1"], dir.path());

    assert_exit(&output, 1);
    assert!(stderr(&output).contains("row 9 is out of range for layout 8x64 (valid: 1-8)"));
}

#[test]
fn test_channel_without_layout_or_default() {
    let dir = temp_config_dir();
    let output = run(&["channel", "--row", "1", "--col", "1"], dir.path());

    assert_exit(&output, 1);
    assert!(stderr(&output).contains("No layout given"));
}

// ============================================================================
// table
// ============================================================================

#[test]
fn test_table_plain() {
    let dir = temp_config_dir();
    let output = run(&["table", "--layout", "8x32", "--wiring", "ML"], dir.path());

    assert_exit(&output, 0);
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Layout 8x32 (ML)");
    assert_eq!(lines.len(), 9);
    assert!(lines[1].starts_with("row  1: 133 134"));
    assert!(lines[8].ends_with(" 864"));
}

#[test]
fn test_table_json() {
    let dir = temp_config_dir();
    let output = run(&["table", "--layout", "4x128", "--json"], dir.path());

    assert_exit(&output, 0);
    let result = stdout_json(&output);
    assert_eq!(result["rows"], 4);
    assert_eq!(result["cols"], 128);

    let channels = result["channels"].as_array().unwrap();
    assert_eq!(channels.len(), 512);
    assert_eq!(channels[0]["channel"], "101");
    assert_eq!(channels[511]["channel"], "828");
}

// ============================================================================
// locate
// ============================================================================

#[test]
fn test_locate_json() {
    let dir = temp_config_dir();
    let output = run(
        &["locate", "--layout", "4x32", "--wiring", "M2L", "--id", "401", "--json"],
        dir.path(),
    );

    assert_exit(&output, 0);
    let result = stdout_json(&output);
    assert_eq!(result["channel"], "401");
    assert_eq!(result["row"], 2);
    assert_eq!(result["col"], 5);
}

#[test]
fn test_locate_plain() {
    let dir = temp_config_dir();
    let output = run(&["locate", "--layout", "16x32", "--id", "832"], dir.path());

    assert_exit(&output, 0);
    let text = stdout(&output);
    assert!(text.contains("Row:     15"));
    assert!(text.contains("Column:  32"));
}

#[test]
fn test_locate_unknown_channel() {
    let dir = temp_config_dir();
    let output = run(&["locate", "--layout", "8x64", "--id", "165"], dir.path());

    assert_exit(&output, 1);
    assert!(stderr(&output).contains("Channel 165 does not exist on layout 8x64"));
}

#[test]
fn test_locate_rejects_malformed_id() {
    let dir = temp_config_dir();
    let output = run(&["locate", "--layout", "8x64", "--id", "0101"], dir.path());

    assert_exit(&output, 1);
    assert!(stderr(&output).contains("Invalid channel identifier"));
}

// ============================================================================
// layouts
// ============================================================================

#[test]
fn test_layouts_json() {
    let dir = temp_config_dir();
    let output = run(&["layouts", "--json"], dir.path());

    assert_exit(&output, 0);
    let result = stdout_json(&output);
    let layouts = result.as_array().unwrap();
    assert_eq!(layouts.len(), 6);

    let first = &layouts[0];
    assert_eq!(first["name"], "4x32");
    assert_eq!(first["channels"], 128);
    assert_eq!(
        first["wiring_configs"],
        serde_json::json!(["M1H", "M1L", "M2H", "M2L"])
    );
    assert_eq!(layouts[5]["name"], "16x32");
    assert_eq!(layouts[5]["wiring_configs"], serde_json::json!([]));
}

#[test]
fn test_layouts_plain() {
    let dir = temp_config_dir();
    let output = run(&["layouts"], dir.path());

    assert_exit(&output, 0);
    let text = stdout(&output);
    assert!(text.contains("4x128"));
    assert!(text.contains("MH, ML"));
}
