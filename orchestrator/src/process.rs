//! Child process invocation for the Node.js runtime.

use std::io;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

/// Script executed by the main suite run, resolved relative to the
/// orchestrator's own directory.
pub const SUITE_SCRIPT: &str = "run_tests.js";

/// Captured output of a finished child process.
///
/// Streams are decoded with replacement characters so malformed bytes never
/// abort the capture. `exit_code` is `None` when the child was terminated by
/// a signal.
#[derive(Debug)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Render an exit code for logs and reports: the literal integer, or `none`
/// when the child never produced one.
pub fn display_code(code: Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

/// Result of the diagnostic `-v` probe.
#[derive(Debug)]
pub enum VersionProbe {
    /// Runtime responded; trimmed stdout of `node -v`.
    Found(String),
    /// The executable does not exist at all.
    Missing,
}

/// Run `<node> -v` for diagnostic reporting.
///
/// A missing executable is a recognized outcome, not an error; any other
/// spawn failure propagates.
#[instrument(skip_all, fields(node = %node.display()))]
pub fn probe_version(node: &Path) -> Result<VersionProbe> {
    match Command::new(node).arg("-v").output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            debug!(%version, "version probe succeeded");
            Ok(VersionProbe::Found(version))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("version probe: executable missing");
            Ok(VersionProbe::Missing)
        }
        Err(err) => Err(err).context("run version probe"),
    }
}

/// Run the test suite, blocking until the child exits.
///
/// A non-zero child exit is a normal result carried in [`CommandOutput`];
/// only spawn/wait failures are errors.
#[instrument(skip_all, fields(node = %node.display(), base_dir = %base_dir.display()))]
pub fn run_suite(node: &Path, base_dir: &Path) -> Result<CommandOutput> {
    let output = Command::new(node)
        .arg(SUITE_SCRIPT)
        .current_dir(base_dir)
        .output()
        .with_context(|| format!("run {} {}", node.display(), SUITE_SCRIPT))?;

    let captured = CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    debug!(exit_code = ?captured.exit_code, "suite run finished");
    Ok(captured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_version_reports_missing_executable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("no-such-runtime");

        let probe = probe_version(&missing).expect("probe");
        assert!(matches!(probe, VersionProbe::Missing));
    }

    #[test]
    fn probe_version_captures_trimmed_stdout() {
        // `echo -v` prints the flag back, standing in for a version string.
        let probe = probe_version(Path::new("echo")).expect("probe");
        match probe {
            VersionProbe::Found(version) => assert_eq!(version, "-v"),
            VersionProbe::Missing => panic!("echo should exist on PATH"),
        }
    }

    #[test]
    fn run_suite_captures_stdout_and_exit_code() {
        let temp = tempfile::tempdir().expect("tempdir");

        let output = run_suite(Path::new("echo"), temp.path()).expect("run echo");
        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout.trim(), SUITE_SCRIPT);
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn run_suite_propagates_spawn_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("no-such-runtime");

        assert!(run_suite(&missing, temp.path()).is_err());
    }

    #[test]
    fn display_code_renders_signal_death_as_none() {
        assert_eq!(display_code(Some(3)), "3");
        assert_eq!(display_code(None), "none");
    }
}
