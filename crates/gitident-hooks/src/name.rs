// Rust guideline compliant 2026-08-20

//! Pre-commit hook validating the configured Git `user.name`.

use gitident_core::{check_name, RepoConfigReader};

/// Runs the `user.name` hook against the repository discovered from the
/// current directory.
///
/// Names are free-form, so unlike the email hook there is no shape test:
/// any non-empty trimmed value is matched against the templates.
///
/// # Returns
///
/// The process exit code: 0 when accepted (or when no templates were
/// supplied), 1 otherwise. All diagnostics go to standard output.
pub fn user_name_hook(templates: &[String]) -> u8 {
    let reader = RepoConfigReader;
    crate::report(check_name(&reader, templates))
}
