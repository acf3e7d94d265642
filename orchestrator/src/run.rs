//! Pipeline orchestration.
//!
//! Locate runtime → version probe → suite run → persist log → echo output →
//! extract summary → classify verdict. Linear and fully synchronous; the run
//! blocks on the child until it terminates.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, instrument, warn};

use crate::locate::find_node;
use crate::process::{self, VersionProbe, display_code};
use crate::run_log::{self, LOG_FILE};
use crate::summary;
use crate::verdict::Verdict;

/// Run the whole pipeline and return the terminal verdict.
///
/// `Err` is reserved for unexpected failures (log I/O, spawn errors other
/// than a missing runtime); every anticipated outcome maps to a [`Verdict`].
#[instrument(skip_all)]
pub fn run() -> Result<Verdict> {
    info!("test run started");
    let base_dir = base_dir()?;
    let node = find_node();
    println!("Using node: {}", node.display());

    match process::probe_version(&node)? {
        VersionProbe::Found(version) => println!("Node version: {version}"),
        VersionProbe::Missing => {
            eprintln!("ERROR: node not found.");
            return Ok(Verdict::EnvironmentMissing);
        }
    }

    let log_path = base_dir.join(LOG_FILE);
    let output = match process::run_suite(&node, &base_dir) {
        Ok(output) => output,
        Err(err) => {
            // Flush a log even when the invocation itself fell over.
            if let Err(log_err) = run_log::write_aborted(&log_path, &node, &err) {
                warn!(err = %log_err, "aborted-run log not written");
            }
            return Err(err);
        }
    };
    run_log::write(&log_path, &node, &output)?;

    print!("{}", output.stdout);
    if !output.stderr.is_empty() {
        eprintln!("--- stderr ---");
        eprint!("{}", output.stderr);
    }

    let Some(counts) = summary::extract(&output.stdout) else {
        eprintln!("ERROR: Could not find summary line in output.");
        return Ok(Verdict::ParseFailed);
    };

    println!();
    println!("=== Orchestrator result ===");
    println!("Passed: {}, Failed: {}", counts.passed, counts.failed);
    println!("Log saved to: {}", log_path.display());

    let verdict = Verdict::classify(output.exit_code, counts);
    match verdict {
        Verdict::ChildNonZero(code) => {
            eprintln!("ERROR: node process exited with code {}", display_code(code));
        }
        Verdict::TestsFailed(failed) => eprintln!("ERROR: {failed} test(s) failed."),
        Verdict::AllPassed => println!("All tests passed."),
        Verdict::EnvironmentMissing | Verdict::ParseFailed => {}
    }
    info!(verdict = ?verdict, "test run finished");
    Ok(verdict)
}

/// Directory containing the orchestrator executable.
///
/// Both the suite script and the run log resolve here.
fn base_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("resolve orchestrator executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("orchestrator executable has no parent directory"))
}
