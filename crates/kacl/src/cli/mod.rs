//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{config_root, load_config_or_default, Config};
use commands::{CompletionsCommand, FmtCommand, InitCommand, ShowCommand, ValidateCommand};

/// kacl - Keep a Changelog command-line tool
#[derive(Debug, Parser)]
#[command(name = "kacl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Changelog file (overrides the configured path)
    #[arg(short, long, global = true, env = "KACL_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new changelog
    Init(InitCommand),

    /// Check that the changelog parses
    Validate(ValidateCommand),

    /// Rewrite the changelog in canonical form
    Fmt(FmtCommand),

    /// Print a single entry
    Show(ShowCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .with_context(|| format!("cannot enter directory {}", dir.display()))?;
        }

        match self.command {
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Validate(ref cmd) => cmd.execute(&self),
            Commands::Fmt(ref cmd) => cmd.execute(&self),
            Commands::Show(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load the project settings that apply to `cwd`
    pub fn project_in(&self, cwd: &Path) -> anyhow::Result<Project> {
        let (config, config_path) = load_config_or_default(cwd)?;
        let root = config_path
            .as_deref()
            .map_or_else(|| cwd.to_path_buf(), config_root);
        debug!(root = %root.display(), "project root");
        Ok(Project { config, root })
    }

    /// Resolve the changelog path: `--file` first, then configuration
    pub fn changelog_path(&self) -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        self.changelog_path_in(&cwd)
    }

    /// Resolve the changelog path as seen from `cwd`.
    ///
    /// `--file` is relative to `cwd` and skips configuration entirely.
    pub fn changelog_path_in(&self, cwd: &Path) -> anyhow::Result<PathBuf> {
        let path = match &self.file {
            Some(file) => cwd.join(file),
            None => self.project_in(cwd)?.changelog_path(),
        };
        debug!(path = %path.display(), "resolved changelog path");
        Ok(path)
    }

    /// Read the changelog file
    pub fn read_changelog(&self) -> anyhow::Result<(PathBuf, String)> {
        let path = self.changelog_path()?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read changelog {}", path.display()))?;
        Ok((path, content))
    }
}

/// Configuration together with the directory its paths are relative to
#[derive(Debug, Clone)]
pub struct Project {
    pub config: Config,
    /// Directory of the config file, or the working directory without one
    pub root: PathBuf,
}

impl Project {
    /// Configured changelog path
    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(&self.config.changelog.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "kacl", "show", "--format", "json", "-f", "HISTORY.md", "1.0.0",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.file, Some(PathBuf::from("HISTORY.md")));
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn test_file_flag_resolves_against_cwd() {
        let cli = Cli::try_parse_from(["kacl", "validate", "-f", "CHANGES.md"]).unwrap();
        assert_eq!(
            cli.changelog_path_in(Path::new("/work/docs")).unwrap(),
            PathBuf::from("/work/docs/CHANGES.md")
        );
    }

    #[test]
    fn test_configured_file_resolves_against_config_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path();
        std::fs::write(root.join("kacl.toml"), "[changelog]\nfile = \"HISTORY.md\"\n").unwrap();
        std::fs::write(root.join("HISTORY.md"), "## [Unreleased]\n").unwrap();
        let nested = root.join("docs");
        std::fs::create_dir_all(&nested).unwrap();

        let cli = Cli {
            file: None,
            ..Cli::try_parse_from(["kacl", "validate"]).unwrap()
        };
        assert_eq!(cli.changelog_path_in(&nested).unwrap(), root.join("HISTORY.md"));
        assert_eq!(cli.project_in(&nested).unwrap().root, root);
    }

    #[test]
    fn test_configured_file_in_github_dir_resolves_against_repo_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join(".github")).unwrap();
        std::fs::write(
            root.join(".github").join("kacl.yaml"),
            "changelog:\n  file: docs/CHANGES.md\n",
        )
        .unwrap();
        let nested = root.join("src").join("bin");
        std::fs::create_dir_all(&nested).unwrap();

        let cli = Cli {
            file: None,
            ..Cli::try_parse_from(["kacl", "validate"]).unwrap()
        };
        assert_eq!(
            cli.changelog_path_in(&nested).unwrap(),
            root.join("docs").join("CHANGES.md")
        );
    }
}
