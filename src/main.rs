use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use nette_lint_hooks::hooks;

/// Advisory lint and style-fix hooks for Claude Code editing Nette projects.
#[derive(Debug, Parser)]
#[command(name = "nette-lint-hooks", version, about)]
struct Cli {
    /// Kill the helper if it runs longer than this many seconds
    /// (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a PostToolUse hook fixing PHP coding standards via ecs
    FixPhpStyle,
    /// Run as a PostToolUse hook validating Latte templates
    LintLatte,
    /// Run as a PostToolUse hook validating NEON files
    LintNeon,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let timeout = cli.timeout_secs.map(Duration::from_secs);

    let config = match cli.command {
        Commands::FixPhpStyle => &hooks::PHP_STYLE,
        Commands::LintLatte => &hooks::LATTE_LINT,
        Commands::LintNeon => &hooks::NEON_LINT,
    };
    nette_lint_hooks::run_hook(config, timeout)
}
