// Rust guideline compliant 2026-08-18

//! Error types for the gitident core library.

use thiserror::Error;

/// Result type alias for gitident operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gitident operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied template is not a valid regular expression.
    #[error("Invalid template '{pattern}': {source}")]
    InvalidTemplate {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The regex compiler's diagnosis.
        source: regex::Error,
    },
}
