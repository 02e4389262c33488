use std::io::Read;
use std::process::ExitCode;
use std::time::Duration;

use crate::hooks::{self, HookConfig, HookOutcome};
use crate::protocol::HookInput;

/// Exit code telling the agent the edit violates a checked convention.
/// The only other code this binary produces is 0.
const EXIT_VIOLATIONS: u8 = 2;

/// Execute one hook: read JSON from stdin, run the pipeline, relay the result.
///
/// Success and every skip are silent exits with status 0. Helper findings go
/// to stderr under a one-line header, with status 2. Nothing is ever written
/// to stdout, and no other exit code exists — an unreadable stdin or a broken
/// helper must not look different from "nothing to report".
pub fn run(config: &HookConfig, timeout: Option<Duration>) -> ExitCode {
    let mut raw = String::new();
    if std::io::stdin().read_to_string(&mut raw).is_err() {
        raw.clear();
    }
    let input = HookInput::from_json(&raw);

    match hooks::execute(config, &input, timeout) {
        HookOutcome::Skip | HookOutcome::Clean => ExitCode::SUCCESS,
        HookOutcome::Violations { header, output } => {
            eprintln!("{header}");
            eprintln!("{}", output.trim_end());
            ExitCode::from(EXIT_VIOLATIONS)
        }
    }
}
