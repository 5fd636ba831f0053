// Rust guideline compliant 2026-08-20

//! CLI entry point for the `user.name` identity hook.

use clap::Parser;
use std::process::ExitCode;

/// Checks that the Git config user.name matches one of the specified templates.
#[derive(Parser, Debug)]
#[command(name = "check-git-config-user-name", version, about)]
struct Cli {
    /// One or more templates that the Git config user.name must match
    #[arg(long, num_args = 1.., value_name = "PATTERN")]
    templates: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    ExitCode::from(gitident_hooks::user_name_hook(&cli.templates))
}
