//! Init command

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;

use keepachangelog::{Changelog, Entry};

use super::fmt::join_preamble;
use crate::cli::{output, Cli};

/// Create a new changelog
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing changelog
    #[arg(long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let project = cli.project_in(&cwd)?;
        let path = match &cli.file {
            Some(file) => cwd.join(file),
            None => project.changelog_path(),
        };

        // Check if changelog already exists
        if path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Changelog already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Changelog already exists at {}. Overwrite?",
                    path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        if !cli.quiet {
            output::info(&format!("Creating {}", path.display()));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, initial_content(&project.config.changelog.title))?;

        if !cli.quiet {
            output::success(&format!(
                "Changelog created at {}",
                output::path_style().apply_to(path.display())
            ));
        }

        Ok(())
    }
}

/// Title followed by an empty `[Unreleased]` entry
fn initial_content(title: &str) -> String {
    let changelog = Changelog::new(vec![Entry::unreleased()]);
    join_preamble(title, &changelog.unparse())
}
