//! Suite summary extraction from captured stdout.

use std::sync::LazyLock;

use regex::Regex;

/// Pass/fail counts reported by the suite.
///
/// Only produced when the summary line matched; a missing line is a distinct
/// failure condition, never treated as zero counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: u64,
    pub failed: u64,
}

static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Passed\s*:\s*(\d+)\s*,\s*Failed\s*:\s*(\d+)").unwrap());

/// Extract the first `Passed: N, Failed: M` occurrence from `stdout`.
///
/// Whitespace-tolerant around the colons and the comma. A matched line whose
/// digits overflow `u64` counts as no match.
pub fn extract(stdout: &str) -> Option<Summary> {
    let captures = SUMMARY_RE.captures(stdout)?;
    let passed = captures[1].parse().ok()?;
    let failed = captures[2].parse().ok()?;
    Some(Summary { passed, failed })
}
