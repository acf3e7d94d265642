//! Test-suite orchestrator CLI.
//!
//! Runs `run_tests.js` under a resolved Node.js runtime and verifies the
//! suite's summary against the child exit code. See [`orchestrator::run`]
//! for the pipeline.

use clap::Parser;

use orchestrator::{exit_codes, logging, run};

/// No flags beyond the generated `--help`/`--version`; the orchestrator
/// reads no configuration.
#[derive(Parser)]
#[command(
    name = "orchestrator",
    version,
    about = "Run the bundled test suite and verify its pass/fail summary"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();
    match run::run() {
        Ok(verdict) => std::process::exit(verdict.exit_code()),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILED);
        }
    }
}
