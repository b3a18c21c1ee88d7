//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path
        .extension()
        .is_some_and(|e| e == "yaml" || e == "yml")
    {
        "YAML"
    } else {
        "TOML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `kacl.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/kacl.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.is_file() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration, using defaults when no file exists.
///
/// A config file that exists but fails to load is still an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    default_when_missing(load_config_from_dir(dir))
}

fn default_when_missing(loaded: Result<(Config, PathBuf)>) -> Result<(Config, Option<PathBuf>)> {
    match loaded {
        Ok((config, path)) => Ok((config, Some(path))),
        Err(ConfigError::NotFound(dir)) => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
        Err(e) => Err(e),
    }
}

/// Directory that relative paths in a config file are resolved against.
///
/// This is the directory holding the file, or the repository root for a
/// file kept in `.github/`.
pub fn config_root(config_path: &Path) -> PathBuf {
    let dir = config_path.parent().unwrap_or_else(|| Path::new(""));
    match (dir.file_name(), dir.parent()) {
        (Some(name), Some(parent)) if name == ".github" => parent.to_path_buf(),
        _ => dir.to_path_buf(),
    }
}
