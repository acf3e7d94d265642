//! Final run verdict and exit-code mapping.

use crate::exit_codes;
use crate::summary::Summary;

/// Terminal outcome of an orchestrator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The runtime executable is missing entirely; the suite never ran.
    EnvironmentMissing,
    /// The suite output carried no recognizable summary line.
    ParseFailed,
    /// The child exited non-zero or died to a signal, overriding the counts.
    ChildNonZero(Option<i32>),
    /// The child exited cleanly but reported failing tests.
    TestsFailed(u64),
    /// Clean child exit, zero failures.
    AllPassed,
}

impl Verdict {
    /// Classify a completed, parsed run.
    ///
    /// A non-zero child exit always wins over the parsed counts, so a crash
    /// after printing `Failed: 0` still fails the run.
    pub fn classify(exit_code: Option<i32>, summary: Summary) -> Self {
        match exit_code {
            Some(0) if summary.failed == 0 => Verdict::AllPassed,
            Some(0) => Verdict::TestsFailed(summary.failed),
            code => Verdict::ChildNonZero(code),
        }
    }

    /// Process exit code reported to the caller.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::AllPassed => exit_codes::OK,
            Verdict::ChildNonZero(_) | Verdict::TestsFailed(_) => exit_codes::FAILED,
            Verdict::EnvironmentMissing | Verdict::ParseFailed => exit_codes::UNUSABLE,
        }
    }
}
