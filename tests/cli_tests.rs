//! Exercises the `aq` binary end-to-end: argument validation, exit codes,
//! and the documented stdout format.

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_aq");
    Command::new(exe).args(args).output().expect("failed to spawn aq binary")
}

#[test]
fn wrong_argument_count_exits_1() {
    let output = run(&["4", "1", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn non_integer_argument_exits_2() {
    let output = run(&["four", "1", "0", "0"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn board_too_small_exits_2() {
    let output = run(&["1", "1", "0", "0"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn negative_attack_count_exits_2() {
    let output = run(&["5", "-1", "0", "0"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn well_formed_invocation_prints_summary_lines() {
    let output = run(&["5", "1", "0", "0"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("Number of solutions: ")));
    assert!(stdout.lines().any(|l| l.starts_with("Maximum number of queens: ")));
}

#[test]
fn l_nonzero_also_emits_board_diagrams() {
    let output = run(&["6", "2", "1", "0"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Board rows are prefixed with a row index and a vertical bar.
    assert!(stdout.contains('|'));
    assert!(stdout.contains('x') || stdout.contains('o'));
}

#[test]
fn trivial_two_by_two_board_runs_to_completion() {
    let output = run(&["2", "0", "0", "0"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("Number of solutions: ")));
    assert!(stdout.lines().any(|l| l.starts_with("Maximum number of queens: ")));
}
