//! Scenario-level tests for the capture → log → parse → classify pipeline.
//!
//! Each test feeds a captured child output through the same library calls
//! the CLI pipeline makes and checks the verdict, exit code, and persisted
//! log against the documented behavior.

use std::fs;
use std::path::Path;

use orchestrator::exit_codes;
use orchestrator::process::CommandOutput;
use orchestrator::run_log;
use orchestrator::summary;
use orchestrator::verdict::Verdict;

fn captured(exit_code: Option<i32>, stdout: &str, stderr: &str) -> CommandOutput {
    CommandOutput {
        exit_code,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}

fn classify(output: &CommandOutput) -> Verdict {
    match summary::extract(&output.stdout) {
        Some(counts) => Verdict::classify(output.exit_code, counts),
        None => Verdict::ParseFailed,
    }
}

#[test]
fn clean_run_with_zero_failures_exits_zero() {
    let output = captured(Some(0), "suite start\nPassed: 10, Failed: 0\n", "");
    let verdict = classify(&output);
    assert_eq!(verdict, Verdict::AllPassed);
    assert_eq!(verdict.exit_code(), exit_codes::OK);
}

#[test]
fn reported_failures_exit_one() {
    let output = captured(Some(0), "Passed: 8, Failed: 2\n", "");
    let verdict = classify(&output);
    assert_eq!(verdict, Verdict::TestsFailed(2));
    assert_eq!(verdict.exit_code(), exit_codes::FAILED);
}

#[test]
fn child_exit_code_overrides_clean_counts() {
    let output = captured(Some(3), "Passed: 10, Failed: 0\n", "");
    let verdict = classify(&output);
    assert_eq!(verdict, Verdict::ChildNonZero(Some(3)));
    assert_eq!(verdict.exit_code(), exit_codes::FAILED);
}

#[test]
fn missing_summary_exits_two_even_on_clean_child_exit() {
    let output = captured(Some(0), "tests ran but nothing was summarized\n", "");
    let verdict = classify(&output);
    assert_eq!(verdict, Verdict::ParseFailed);
    assert_eq!(verdict.exit_code(), exit_codes::UNUSABLE);
}

#[test]
fn missing_runtime_exits_two() {
    assert_eq!(
        Verdict::EnvironmentMissing.exit_code(),
        exit_codes::UNUSABLE
    );
}

#[test]
fn log_preserves_exit_code_and_stdout_for_failed_runs() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log_path = temp.path().join(run_log::LOG_FILE);
    let output = captured(Some(7), "partial output before crash\n", "stack trace\n");

    run_log::write(&log_path, Path::new("/usr/bin/node"), &output).expect("write log");

    let contents = fs::read_to_string(&log_path).expect("read log");
    assert!(contents.contains("Exit code: 7"));
    assert!(contents.contains("--- stdout ---\npartial output before crash\n"));
    assert!(contents.contains("--- stderr ---\nstack trace\n"));
}

#[test]
fn rerun_replaces_the_previous_log() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log_path = temp.path().join(run_log::LOG_FILE);

    let first = captured(Some(1), "Passed: 0, Failed: 1\n", "");
    run_log::write(&log_path, Path::new("node"), &first).expect("first write");
    let second = captured(Some(0), "Passed: 1, Failed: 0\n", "");
    run_log::write(&log_path, Path::new("node"), &second).expect("second write");

    let contents = fs::read_to_string(&log_path).expect("read log");
    assert!(contents.contains("Passed: 1, Failed: 0"));
    assert!(!contents.contains("Passed: 0, Failed: 1"));
}

#[test]
fn aborted_invocation_still_leaves_a_log_behind() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log_path = temp.path().join(run_log::LOG_FILE);
    let err = anyhow::anyhow!("text file busy").context("run node run_tests.js");

    run_log::write_aborted(&log_path, Path::new("node"), &err).expect("write aborted log");

    let contents = fs::read_to_string(&log_path).expect("read log");
    assert!(contents.contains("Exit code: none"));
    assert!(contents.contains("text file busy"));
}
