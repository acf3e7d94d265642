//! Stable exit codes for the orchestrator process.

/// All tests passed and the runtime exited cleanly.
pub const OK: i32 = 0;
/// The runtime exited non-zero or the suite reported failures.
pub const FAILED: i32 = 1;
/// The runtime is missing entirely, or no summary line was found in the output.
pub const UNUSABLE: i32 = 2;
