// Rust guideline compliant 2026-08-20

//! Pre-commit hook validating the configured Git `user.email`.

use gitident_core::{check_email, RepoConfigReader};

/// Runs the `user.email` hook against the repository discovered from the
/// current directory.
///
/// # Arguments
///
/// * `templates` - Regular-expression templates the value must match
///
/// # Returns
///
/// The process exit code: 0 when accepted (or when no templates were
/// supplied), 1 when the value is unset, does not look like an email
/// address, matches no template, or a template fails to compile. All
/// diagnostics go to standard output.
pub fn user_email_hook(templates: &[String]) -> u8 {
    let reader = RepoConfigReader;
    crate::report(check_email(&reader, templates))
}
