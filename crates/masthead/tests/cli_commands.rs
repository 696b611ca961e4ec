//! Runs the built binary against temporary config and script files

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn masthead(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_masthead"));
    cmd.arg("--config")
        .arg(dir.path().join("masthead.toml"))
        .env_remove("MASTHEAD_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_replay_json_lines() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("steps.txt");
    fs::write(&script, "scroll 120\nmenu\npanel Domains\n").unwrap();

    let output = masthead(&dir)
        .args(["replay", "--json"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);

    let last: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
    assert_eq!(last["state"]["theme"], "dark");
    assert_eq!(last["state"]["active_mobile_panel"], "Domains");
}

#[test]
fn test_replay_inline_steps_table() {
    let dir = TempDir::new().unwrap();
    let output = masthead(&dir)
        .args(["replay", "-s", "toggle Security", "-s", "outside"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("toggle Security"));
    assert!(stdout.contains("outside"));
}

#[test]
fn test_replay_bad_step_fails() {
    let dir = TempDir::new().unwrap();
    let output = masthead(&dir)
        .args(["replay", "-s", "teleport"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("teleport"));
    assert!(stderr.contains("line 1:"), "lone step is line 1: {stderr}");
    assert!(stderr.contains("Expected one of"));
}

#[test]
fn test_replay_step_after_script_keeps_line_numbers() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("steps.txt");
    fs::write(&script, "scroll 120\nmenu\n").unwrap();

    let output = masthead(&dir)
        .arg("replay")
        .arg(&script)
        .args(["-s", "back", "-s", "teleport"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 4:"), "script lines then steps: {stderr}");
}

#[test]
fn test_config_init_then_check() {
    let dir = TempDir::new().unwrap();

    let init = masthead(&dir).args(["config", "init"]).output().unwrap();
    assert!(init.status.success());
    assert!(dir.path().join("masthead.toml").exists());

    let again = masthead(&dir).args(["config", "init"]).output().unwrap();
    assert!(!again.status.success());

    let check = masthead(&dir).args(["config", "check"]).output().unwrap();
    assert!(check.status.success());
    assert!(String::from_utf8(check.stdout).unwrap().starts_with("OK:"));
}

#[test]
fn test_config_check_reports_duplicates() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("masthead.toml"),
        "[[primary]]\nlabel = \"Shop\"\n[[utility]]\nlabel = \"Shop\"\n",
    )
    .unwrap();

    let output = masthead(&dir).args(["config", "check"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("Duplicate navigation label"));
}
