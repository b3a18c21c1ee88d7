//! Show command

use anyhow::{anyhow, Context};
use clap::Args;
use tracing::info;

use keepachangelog::{Changelog, Entry, MarkdownFormatter, VersionRef};

use crate::cli::{Cli, OutputFormat};

/// Print a single entry
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// `Unreleased` or a semantic version (default: latest release)
    #[arg(id = "version_label", value_name = "VERSION")]
    pub version: Option<String>,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.version, "executing show command");
        let (path, content) = cli.read_changelog()?;

        let changelog = Changelog::parse(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let entry = select_entry(&changelog, self.version.as_deref())?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(entry)?);
            }
            OutputFormat::Text => {
                print!("{}", MarkdownFormatter::new().format_entry(entry));
            }
        }

        Ok(())
    }
}

/// Pick the entry named by `version`, or the latest release
fn select_entry<'a>(changelog: &'a Changelog, version: Option<&str>) -> anyhow::Result<&'a Entry> {
    match version {
        Some(label) => {
            let wanted: VersionRef = label
                .parse()
                .with_context(|| format!("invalid version '{}'", label))?;
            changelog
                .find(&wanted)
                .ok_or_else(|| anyhow!("no entry for {} in changelog", wanted))
        }
        None => changelog
            .latest_release()
            .ok_or_else(|| anyhow!("changelog has no released entry")),
    }
}
