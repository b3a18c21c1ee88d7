//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_CHANGELOG_FILE, DEFAULT_TITLE};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog file settings
    pub changelog: ChangelogConfig,
}

/// Changelog file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog path, relative to the directory the config file applies to
    /// (see [`config_root`](super::config_root))
    pub file: PathBuf,

    /// Heading placed above the entries by `kacl init`
    pub title: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
