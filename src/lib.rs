pub mod discovery;
pub mod domain;
pub mod hooks;
pub mod protocol;

pub(crate) mod cli;
pub(crate) mod command;

/// Run one hook variant: read JSON from stdin, lint the edited file, report
/// via exit code and stderr.
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing `cli` internals. Not a stable
/// integration API — callers should use [`hooks::execute`] directly.
pub fn run_hook(
    config: &hooks::HookConfig,
    timeout: Option<std::time::Duration>,
) -> std::process::ExitCode {
    cli::hook::run(config, timeout)
}
