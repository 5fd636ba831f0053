// Rust guideline compliant 2026-08-18

//! Identity value normalization and the coarse email shape test.

use regex::Regex;
use std::sync::OnceLock;

/// Shape test for email-looking values: a whitespace-free local part, an
/// `@`, and a whitespace-free domain containing a `.`.
///
/// This is a coarse syntactic sanity check, not RFC address validation.
/// Values such as `user@domain..com` pass it; values with embedded
/// whitespace, no `@`, or no `.` after the `@` do not.
pub const EMAIL_SHAPE: &str = r"^\S+@\S+\.\S+$";

/// Trims the raw configuration output.
///
/// Returns `None` when the value is empty or whitespace-only, which the
/// checkers treat as "identity not set".
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Returns whether `value` passes the email shape test.
pub fn looks_like_email(value: &str) -> bool {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE
        .get_or_init(|| Regex::new(EMAIL_SHAPE).expect("EMAIL_SHAPE compiles"))
        .is_match(value)
}
