use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

// Without a display server window creation fails: the binary must exit
// nonzero with a diagnostic, printing the scene summary alongside it.
#[test]
fn headless_run_fails_with_a_diagnostic_and_summary() {
    let mut cmd = Command::cargo_bin("multilight").expect("binary exists");
    cmd.env_remove("DISPLAY").env_remove("WAYLAND_DISPLAY");
    cmd.assert()
        .failure()
        .stderr(contains("failed to initialize"))
        .stdout(contains("Scene summary:"))
        .stdout(contains(" - 4 lit cube(s)"))
        .stdout(contains(" - 1 point light(s), 1 directional, 1 spot"))
        .stdout(contains("   cube at (2.0, 0.0, 2.0)"));
}
