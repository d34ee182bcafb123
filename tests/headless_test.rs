use std::process::{Command, Output};

fn run_headless(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crossy_road"))
        .args(args)
        .env("RUST_LOG", "warn,crossy_road=info")
        .output()
        .expect("Failed to execute game")
}

/// Test that the game runs in headless mode without crashing
#[test]
fn test_headless_game_runs() {
    let output = run_headless(&["--seed", "7", "--frames", "300", "--print-every", "0"]);

    assert!(
        output.status.success(),
        "Game failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SESSION COMPLETE"),
        "Game did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that session statistics are logged
#[test]
fn test_session_statistics_logged() {
    let output = run_headless(&[
        "--seed", "7", "--frames", "300", "--moves", "fff", "--print-every", "0",
    ]);
    assert!(output.status.success(), "Game failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    for label in [
        "Frames run:",
        "Final score:",
        "Best score:",
        "Games played:",
        "Collisions:",
    ] {
        assert!(stderr.contains(label), "Missing '{}' statistic", label);
    }
    assert!(stderr.contains("Frames run: 300"));
}

/// Test that the final board is printed
#[test]
fn test_final_board_printed() {
    let output = run_headless(&["--seed", "3", "--frames", "10", "--print-every", "0"]);
    assert!(output.status.success(), "Game failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Final State ==="));
    assert!(stdout.contains("=== Board ==="));
    assert!(stdout.contains('@'), "Chicken missing from the board");
}

/// Test that a malformed move script is reported
#[test]
fn test_bad_move_script_fails() {
    let output = run_headless(&["--frames", "10", "--moves", "fxq"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("move script"), "stderr: {}", stderr);
}

/// Test that an impossible board is refused up front
#[test]
fn test_invalid_board_is_refused() {
    let output = run_headless(&["--frames", "10", "--columns", "3"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid game configuration"), "stderr: {}", stderr);
}
