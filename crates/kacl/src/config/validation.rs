//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");

    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        });
    }

    debug!("configuration validation passed");
    Ok(())
}
