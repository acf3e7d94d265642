//! Run log persistence at `test_log.txt`.
//!
//! The log is a product artifact: written once per run, overwriting the
//! previous run's log, and flushed before any failure path exits.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

use crate::process::{CommandOutput, display_code};

/// Fixed log filename, resolved next to the orchestrator executable.
pub const LOG_FILE: &str = "test_log.txt";

/// Write the log for a completed suite run.
pub fn write(path: &Path, node: &Path, output: &CommandOutput) -> Result<()> {
    write_contents(path, &render(node, output, &Utc::now().to_rfc3339()))
}

/// Write the log for a run whose invocation failed before producing output.
///
/// The error chain lands in the stderr section so the artifact still records
/// what happened, keeping the flush-on-every-exit-path guarantee.
pub fn write_aborted(path: &Path, node: &Path, err: &anyhow::Error) -> Result<()> {
    let output = CommandOutput {
        exit_code: None,
        stdout: String::new(),
        stderr: format!("invocation failed: {err:#}\n"),
    };
    write_contents(path, &render(node, &output, &Utc::now().to_rfc3339()))
}

/// Render the full log text: header with timestamp, runtime identity and
/// exit code, a stdout section, and a stderr section only when stderr is
/// non-empty.
pub fn render(node: &Path, output: &CommandOutput, timestamp: &str) -> String {
    let mut log = format!(
        "=== Test run: {timestamp} ===\nNode: {}\nExit code: {}\n\n",
        node.display(),
        display_code(output.exit_code),
    );
    log.push_str("--- stdout ---\n");
    log.push_str(&output.stdout);
    if !output.stderr.is_empty() {
        log.push_str("\n--- stderr ---\n");
        log.push_str(&output.stderr);
    }
    log
}

fn write_contents(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create log {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write log {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "run log written");
    Ok(())
}
