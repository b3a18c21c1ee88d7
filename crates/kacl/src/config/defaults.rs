//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "kacl.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "kacl.yaml";

/// Default changelog file name
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default document title written by `kacl init`
pub const DEFAULT_TITLE: &str = "# Changelog";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".kacl.toml",
        ".kacl.yaml",
    ]
}
