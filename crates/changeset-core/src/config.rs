//! Changeset configuration
//!
//! Defaults reproduce the stock manifest layout. A config file
//! (`.changeset.toml` at the repository root, or an explicit path in any
//! format [`ConfigStore`] understands) overrides individual fields.

use std::fmt;
use std::str::FromStr;

use changeset_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Config file looked up at the repository root when none is given.
pub const CONFIG_FILE_NAME: &str = ".changeset.toml";

/// Which diff provider produces the name-status list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffBackend {
    /// Read trees in-process through libgit2
    #[default]
    Git2,
    /// Run the `git` executable
    Cli,
}

impl FromStr for DiffBackend {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "git2" | "libgit2" => Ok(DiffBackend::Git2),
            "cli" | "git" | "command" => Ok(DiffBackend::Cli),
            _ => Err(Error::config(format!(
                "unknown diff backend '{s}' (expected 'git2' or 'cli')"
            ))),
        }
    }
}

impl fmt::Display for DiffBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffBackend::Git2 => write!(f, "git2"),
            DiffBackend::Cli => write!(f, "cli"),
        }
    }
}

/// Tunables for path normalization and manifest output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChangesetConfig {
    /// Number of leading path segments kept per changed file
    pub segment_depth: usize,
    /// Top-level key holding added/modified entries
    pub manifest_key: String,
    /// Top-level key holding deleted entries
    pub destructive_key: String,
    /// File-name prefix of the destructive-changes companion file
    pub destructive_prefix: String,
    /// Diff provider
    pub backend: DiffBackend,
}

impl Default for ChangesetConfig {
    fn default() -> Self {
        Self {
            segment_depth: 3,
            manifest_key: "manifest".to_string(),
            destructive_key: "destructiveChanges".to_string(),
            destructive_prefix: "destructive-changes-".to_string(),
            backend: DiffBackend::default(),
        }
    }
}

impl ChangesetConfig {
    /// Resolve configuration for a repository.
    ///
    /// An explicit path must exist. Without one, `<repo_root>/.changeset.toml`
    /// is used when present and built-in defaults otherwise.
    pub fn load(repo_root: &NormalizedPath, explicit: Option<&NormalizedPath>) -> Result<Self> {
        let store = ConfigStore::new();
        let config: Self = match explicit {
            Some(path) => {
                tracing::debug!(path = %path, "Loading explicit config");
                store.load(path)?
            }
            None => store
                .load_optional(&repo_root.join(CONFIG_FILE_NAME))?
                .unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce unreadable or self-overwriting output.
    pub fn validate(&self) -> Result<()> {
        if self.segment_depth == 0 {
            return Err(Error::config("segment_depth must be at least 1"));
        }
        for (name, key) in [
            ("manifest_key", &self.manifest_key),
            ("destructive_key", &self.destructive_key),
        ] {
            if key.is_empty() {
                return Err(Error::config(format!("{name} must not be empty")));
            }
            if key.starts_with(char::is_whitespace) || key.contains(['\n', ':']) {
                return Err(Error::config(format!(
                    "{name} '{key}' must be a bare top-level key"
                )));
            }
        }
        if self.destructive_prefix.is_empty() {
            return Err(Error::config("destructive_prefix must not be empty"));
        }
        if self.destructive_prefix.contains(['/', '\\']) {
            return Err(Error::config(
                "destructive_prefix must not contain path separators",
            ));
        }
        Ok(())
    }
}
