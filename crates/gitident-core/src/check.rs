// Rust guideline compliant 2026-08-19

//! Identity check logic for `user.email` and `user.name`.
//!
//! Both checks follow the same shape: an empty template list accepts
//! immediately without touching the configuration; otherwise the value is
//! fetched once, trimmed, validated (email only), and matched against the
//! templates in order with the first match winning.

use crate::config::{ConfigKey, GitConfigReader};
use crate::error::Result;
use crate::identity;
use crate::templates::TemplateSet;

/// Terminal outcome of one identity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No templates were supplied, so no validation was requested.
    Skipped,

    /// The identity value matched the named template.
    Matched {
        /// Key that was checked.
        key: ConfigKey,
        /// First template that matched.
        template: String,
    },

    /// The configuration key is unset or whitespace-only.
    NotSet {
        /// Key that was checked.
        key: ConfigKey,
    },

    /// The email value failed the shape test.
    MalformedEmail {
        /// The offending trimmed value.
        value: String,
    },

    /// No supplied template matched the value.
    NoMatch {
        /// Key that was checked.
        key: ConfigKey,
        /// The offending trimmed value.
        value: String,
        /// Every template that was tried, in order.
        templates: Vec<String>,
    },
}

impl CheckOutcome {
    /// Maps the outcome to a process exit code: 0 accepted, 1 rejected.
    pub fn exit_code(&self) -> u8 {
        if self.is_accepted() {
            0
        } else {
            1
        }
    }

    /// Returns whether the outcome accepts the commit.
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckOutcome::Skipped | CheckOutcome::Matched { .. })
    }

    /// Renders the diagnostic lines for this outcome.
    ///
    /// `Skipped` produces no output; every other outcome produces the
    /// plain sentences the hook prints on standard output.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            CheckOutcome::Skipped => Vec::new(),
            CheckOutcome::Matched { key, template } => vec![format!(
                "Git config {} is matched to provided template: {}",
                key, template
            )],
            CheckOutcome::NotSet { key } => {
                vec![format!("Git config {} is not set.", key)]
            }
            CheckOutcome::MalformedEmail { value } => vec![
                "Git config user.email does not look like an email address.".to_string(),
                format!("Git config user.email: {}", value),
            ],
            CheckOutcome::NoMatch {
                key,
                value,
                templates,
            } => vec![
                format!("Git config {} is not matched to any provided templates.", key),
                format!("Git config {}: {}", key, value),
                format!("Provided templates: {:?}", templates),
            ],
        }
    }
}

/// Checks the configured `user.email` against the supplied templates.
///
/// # Arguments
///
/// * `reader` - Git configuration reader capability
/// * `patterns` - Regular-expression templates the value must match
///
/// # Returns
///
/// The terminal outcome of the check.
///
/// # Errors
///
/// Returns `Error::InvalidTemplate` when a pattern fails to compile.
/// Compilation happens before the configuration query, so an invalid
/// template never triggers an external lookup.
pub fn check_email<R: GitConfigReader>(reader: &R, patterns: &[String]) -> Result<CheckOutcome> {
    let templates = match compile_non_empty(patterns)? {
        Some(templates) => templates,
        None => return Ok(CheckOutcome::Skipped),
    };

    let raw = reader.get(ConfigKey::UserEmail);
    let value = match identity::normalize(&raw) {
        Some(value) => value,
        None => {
            return Ok(CheckOutcome::NotSet {
                key: ConfigKey::UserEmail,
            })
        }
    };

    if !identity::looks_like_email(value) {
        return Ok(CheckOutcome::MalformedEmail {
            value: value.to_string(),
        });
    }

    Ok(match_templates(ConfigKey::UserEmail, value, &templates))
}

/// Checks the configured `user.name` against the supplied templates.
///
/// Names are free-form, so any non-empty trimmed value goes straight to
/// template matching without a shape test.
///
/// # Errors
///
/// Returns `Error::InvalidTemplate` when a pattern fails to compile.
pub fn check_name<R: GitConfigReader>(reader: &R, patterns: &[String]) -> Result<CheckOutcome> {
    let templates = match compile_non_empty(patterns)? {
        Some(templates) => templates,
        None => return Ok(CheckOutcome::Skipped),
    };

    let raw = reader.get(ConfigKey::UserName);
    let value = match identity::normalize(&raw) {
        Some(value) => value,
        None => {
            return Ok(CheckOutcome::NotSet {
                key: ConfigKey::UserName,
            })
        }
    };

    Ok(match_templates(ConfigKey::UserName, value, &templates))
}

fn compile_non_empty(patterns: &[String]) -> Result<Option<TemplateSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    TemplateSet::compile(patterns.iter().cloned()).map(Some)
}

fn match_templates(key: ConfigKey, value: &str, templates: &TemplateSet) -> CheckOutcome {
    match templates.first_match(value) {
        Some(template) => CheckOutcome::Matched {
            key,
            template: template.to_string(),
        },
        None => CheckOutcome::NoMatch {
            key,
            value: value.to_string(),
            templates: templates.patterns(),
        },
    }
}
