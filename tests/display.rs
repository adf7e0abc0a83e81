use std::fs;

use apobec_scatter::plot::display::launch_viewer;
use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn headless_session_skips_viewer() {
    let tmp = TempDir::new().unwrap();
    let png = tmp.path().join("Figure3.png");
    fs::write(&png, b"png").unwrap();

    let launched = launch_viewer(&png, false).unwrap();
    assert!(!launched);
}

#[cfg(target_os = "linux")]
#[test]
fn run_without_display_still_succeeds() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("apobec-scatter").unwrap();
    cmd.env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["run", "--out", tmp.path().to_str().unwrap()]);
    let assert = cmd.assert().success();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("no display available"));
    assert!(tmp.path().join("Figure3.png").exists());
}
