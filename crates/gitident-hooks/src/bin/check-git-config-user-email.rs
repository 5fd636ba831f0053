// Rust guideline compliant 2026-08-20

//! CLI entry point for the `user.email` identity hook.

use clap::Parser;
use std::process::ExitCode;

/// Checks that the Git config user.email matches one of the specified templates.
#[derive(Parser, Debug)]
#[command(name = "check-git-config-user-email", version, about)]
struct Cli {
    /// One or more templates that the Git config user.email must match
    #[arg(long, num_args = 1.., value_name = "PATTERN")]
    templates: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    ExitCode::from(gitident_hooks::user_email_hook(&cli.templates))
}
