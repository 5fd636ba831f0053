// Rust guideline compliant 2026-08-20

//! Gitident Git Hooks
//!
//! This crate provides the pre-commit hook implementations for gitident:
//! - `user.email` validation (`check-git-config-user-email`)
//! - `user.name` validation (`check-git-config-user-name`)

use gitident_core::{CheckOutcome, Result};

pub mod email;
pub mod name;

pub use email::user_email_hook;
pub use name::user_name_hook;

/// Prints the outcome's diagnostics on standard output and maps it to a
/// process exit code.
///
/// Template compilation failures are reported the same way: a labeled
/// sentence on standard output and exit code 1. Nothing is ever written
/// to standard error by the verdict path.
pub(crate) fn report(result: Result<CheckOutcome>) -> u8 {
    match result {
        Ok(outcome) => {
            for line in outcome.report_lines() {
                println!("{}", line);
            }
            outcome.exit_code()
        }
        Err(err) => {
            println!("{}", err);
            1
        }
    }
}
