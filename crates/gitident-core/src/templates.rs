// Rust guideline compliant 2026-08-19

//! Template compilation and prefix-anchored matching.

use crate::error::{Error, Result};
use regex::Regex;

/// An ordered set of compiled identity templates.
///
/// Each template is matched anchored at the start of the candidate value;
/// the end stays unanchored unless the pattern itself ends with `$`.
/// Order determines which template is reported on a match, but any match
/// is equivalent for the pass/fail outcome.
#[derive(Debug)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

#[derive(Debug)]
struct Template {
    pattern: String,
    regex: Regex,
}

impl Template {
    /// A match counts only when it starts at the beginning of the value.
    fn matches_prefix(&self, value: &str) -> bool {
        self.regex.find(value).is_some_and(|m| m.start() == 0)
    }
}

impl TemplateSet {
    /// Compiles the caller-supplied patterns, preserving order.
    ///
    /// # Arguments
    ///
    /// * `patterns` - Regular-expression patterns as supplied by the caller
    ///
    /// # Returns
    ///
    /// A TemplateSet ready for matching.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTemplate` for the first pattern that fails
    /// to compile.
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut templates = Vec::new();
        for pattern in patterns {
            let pattern = pattern.into();
            let regex = Regex::new(&pattern).map_err(|source| Error::InvalidTemplate {
                pattern: pattern.clone(),
                source,
            })?;
            templates.push(Template { pattern, regex });
        }
        Ok(Self { templates })
    }

    /// Returns whether the set contains no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns the first template whose match starts at the beginning of
    /// `value`, if any.
    pub fn first_match(&self, value: &str) -> Option<&str> {
        self.templates
            .iter()
            .find(|template| template.matches_prefix(value))
            .map(|template| template.pattern.as_str())
    }

    /// Returns the original patterns in order.
    pub fn patterns(&self) -> Vec<String> {
        self.templates
            .iter()
            .map(|template| template.pattern.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_preserves_order() {
        let set = TemplateSet::compile(["John.*", "Jane.*"]).unwrap();
        assert_eq!(set.patterns(), vec!["John.*", "Jane.*"]);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let set = TemplateSet::compile([".*@example.com", ".*@company.org"]).unwrap();
        assert_eq!(set.first_match("jane@company.org"), Some(".*@company.org"));
        assert_eq!(set.first_match("jane@example.com"), Some(".*@example.com"));
    }

    #[test]
    fn test_match_is_prefix_anchored() {
        let set = TemplateSet::compile(["Doe"]).unwrap();
        // "Doe" occurs in the value but not at the start.
        assert_eq!(set.first_match("John Doe"), None);

        let set = TemplateSet::compile(["John"]).unwrap();
        assert_eq!(set.first_match("John Doe"), Some("John"));
    }

    #[test]
    fn test_end_is_unanchored_unless_pattern_says_so() {
        let set = TemplateSet::compile(["^John Doe$"]).unwrap();
        assert_eq!(set.first_match("John Doe"), Some("^John Doe$"));
        assert_eq!(set.first_match("John Doe Jr."), None);
    }

    #[test]
    fn test_alternation_matches_like_a_prefix() {
        let set = TemplateSet::compile(["Jane|John"]).unwrap();
        assert_eq!(set.first_match("John Doe"), Some("Jane|John"));
        assert_eq!(set.first_match("Bob Wilson"), None);
    }

    #[test]
    fn test_invalid_pattern_is_reported_with_its_text() {
        let err = TemplateSet::compile(["john(", ".*"]).unwrap_err();
        match err {
            Error::InvalidTemplate { pattern, .. } => assert_eq!(pattern, "john("),
        }
    }
}
