//! The hook execution contract shared by all three variants.
//!
//! Each variant is data: a target extension, a helper discovery strategy,
//! an invocation shape, and a failure header. The pipeline itself —
//! applicability check, helper discovery, subprocess run, result
//! classification — is one function. Every way the pipeline can come up
//! empty (wrong file type, missing file, helper not installed, helper not
//! runnable) collapses into [`HookOutcome::Skip`]: these hooks are advisory
//! and must never block the agent that invoked them.

use std::path::Path;
use std::time::Duration;

use crate::command;
use crate::discovery::{Env, HelperStrategy, OsFamily};
use crate::domain::FileExtension;
use crate::protocol::HookInput;

/// How the helper receives the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// `<helper> <file>`
    Direct,
    /// `<helper> <word> <file>`
    Subcommand(&'static str),
}

/// One hook variant, fully described as data.
#[derive(Debug, Clone, Copy)]
pub struct HookConfig {
    /// File extension this hook reacts to; anything else is skipped.
    pub extension: &'static str,
    pub helper: HelperStrategy,
    pub invocation: Invocation,
    /// Leads the stderr report as `<subject> in <file>:`.
    pub failure_subject: &'static str,
}

/// Fix PHP coding standards with a globally installed `ecs`.
pub const PHP_STYLE: HookConfig = HookConfig {
    extension: "php",
    helper: HelperStrategy::ComposerBin { program: "ecs" },
    invocation: Invocation::Subcommand("fix"),
    failure_subject: "Could not fix all coding standard issues",
};

/// Validate Latte templates with a project-local `latte-lint` script.
pub const LATTE_LINT: HookConfig = HookConfig {
    extension: "latte",
    helper: HelperStrategy::ProjectFile {
        relative: "latte-lint",
    },
    invocation: Invocation::Direct,
    failure_subject: "Latte template error",
};

/// Validate NEON files with the project's `vendor/bin/neon-lint`.
pub const NEON_LINT: HookConfig = HookConfig {
    extension: "neon",
    helper: HelperStrategy::ProjectFile {
        relative: "vendor/bin/neon-lint",
    },
    invocation: Invocation::Direct,
    failure_subject: "NEON syntax error",
};

/// What a hook run amounts to, from the invoking agent's point of view.
#[derive(Debug, PartialEq, Eq)]
pub enum HookOutcome {
    /// Nothing to do: wrong file type, missing file, or no helper installed.
    /// Exit 0, silent.
    Skip,
    /// The helper ran and reported no problems. Exit 0, silent.
    Clean,
    /// The helper reported problems. Exit 2, report on stderr.
    Violations { header: String, output: String },
}

/// Run one hook over a decoded input.
///
/// Reads the process environment and OS family once, then delegates to
/// [`execute_in`].
pub fn execute(config: &HookConfig, input: &HookInput, timeout: Option<Duration>) -> HookOutcome {
    execute_in(config, input, &Env::from_process(), OsFamily::current(), timeout)
}

/// The full pipeline against an explicit environment snapshot.
pub fn execute_in(
    config: &HookConfig,
    input: &HookInput,
    env: &Env,
    family: OsFamily,
    timeout: Option<Duration>,
) -> HookOutcome {
    let file_path = &input.tool_input.file_path;
    if FileExtension::of(file_path) != config.extension || !Path::new(file_path).exists() {
        return HookOutcome::Skip;
    }

    let Some(helper) = config.helper.resolve(&input.cwd, env, family) else {
        return HookOutcome::Skip;
    };

    let args: Vec<&str> = match config.invocation {
        Invocation::Direct => vec![file_path.as_str()],
        Invocation::Subcommand(word) => vec![word, file_path.as_str()],
    };

    match command::invoke(&helper, &args, timeout) {
        Ok(run) if run.exit_code == 0 => HookOutcome::Clean,
        Ok(run) => HookOutcome::Violations {
            header: format!("{} in {}:", config.failure_subject, file_path),
            output: run.output,
        },
        // A helper we found but could not run to completion is treated the
        // same as an absent helper: the hook stays silent.
        Err(_) => HookOutcome::Skip,
    }
}
