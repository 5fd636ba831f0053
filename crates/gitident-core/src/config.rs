// Rust guideline compliant 2026-08-18

//! Git configuration access for identity checks.

use git2::{Config, Repository};

/// Git configuration keys the checkers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// The `user.email` key.
    UserEmail,
    /// The `user.name` key.
    UserName,
}

impl ConfigKey {
    /// Returns the key in Git's dotted notation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::UserEmail => "user.email",
            ConfigKey::UserName => "user.name",
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability for reading a single Git configuration value.
///
/// Expressed as a trait so checks can run against canned values in tests
/// instead of a real repository.
pub trait GitConfigReader {
    /// Returns the raw configured value for `key`, or an empty string
    /// when the key is unset or the lookup fails.
    fn get(&self, key: ConfigKey) -> String;
}

/// Reader backed by the repository discovered from the current directory.
///
/// Uses the repository's resolved configuration (local, global, system),
/// falling back to the default global configuration when no repository
/// is found. Lookup failures come back as the empty string; the checkers
/// treat that as "identity not set" rather than a transient error.
#[derive(Debug, Default)]
pub struct RepoConfigReader;

impl GitConfigReader for RepoConfigReader {
    fn get(&self, key: ConfigKey) -> String {
        let config = match Repository::open_from_env() {
            Ok(repo) => repo.config(),
            Err(_) => Config::open_default(),
        };
        config
            .and_then(|mut config| config.snapshot())
            .and_then(|snapshot| snapshot.get_string(key.as_str()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_dotted_notation() {
        assert_eq!(ConfigKey::UserEmail.as_str(), "user.email");
        assert_eq!(ConfigKey::UserName.as_str(), "user.name");
    }

    #[test]
    fn test_config_key_display() {
        assert_eq!(ConfigKey::UserEmail.to_string(), "user.email");
        assert_eq!(ConfigKey::UserName.to_string(), "user.name");
    }
}
