//! Shared helpers for end-to-end CLI tests.
#![allow(dead_code)] // Each test binary uses a subset

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the switch-matrix binary
pub fn switch_matrix_bin() -> &'static str {
    env!("CARGO_BIN_EXE_switch-matrix")
}

/// Creates an empty config directory that lives as long as the returned guard.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Runs the binary with an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(switch_matrix_bin())
        .env("SWITCH_MATRIX_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Stdout as text.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as text.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}

/// Asserts the process exited with `code`, printing stderr on failure.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
}
