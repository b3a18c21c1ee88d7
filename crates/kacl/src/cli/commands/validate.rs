//! Validate command

use clap::Args;
use console::{style, Style};
use tracing::{info, warn};

use keepachangelog::Changelog;

use crate::cli::{output, Cli, OutputFormat};
use crate::error::ExitError;
use crate::exit_codes;

/// Check that the changelog parses
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, "executing validate command");
        let (path, content) = cli.read_changelog()?;

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        let changelog = match Changelog::parse(&content) {
            Ok(changelog) => Some(changelog),
            Err(e) => {
                warn!(error = %e, "changelog failed to parse");
                errors.push(e.to_string());
                None
            }
        };

        if let Some(ref changelog) = changelog {
            warnings.extend(collect_warnings(changelog));
        }

        // If strict, promote warnings to errors
        if self.strict {
            errors.append(&mut warnings);
        }

        let passed = errors.is_empty();
        let entry_count = changelog.as_ref().map_or(0, |c| c.entries.len());

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "path": path.to_string_lossy(),
                    "entries": entry_count,
                    "errors": errors,
                    "warnings": warnings
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", output::header("Validation Results"));
                    println!();
                    println!("Changelog: {}", output::path_style().apply_to(path.display()));

                    if let Some(latest) = changelog.as_ref().and_then(|c| c.latest_release()) {
                        println!("Latest release: {}", output::entry_label(latest));
                        let summary = output::change_summary(latest);
                        if !summary.is_empty() {
                            println!("  {}", summary);
                        }
                    }
                    println!();

                    output::problems("Errors:", "✗", &Style::new().red(), &errors);
                    output::problems("Warnings:", "!", &Style::new().yellow(), &warnings);

                    if passed {
                        output::success(&format!("{} entries parsed", entry_count));
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Validation failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if !passed {
            return Err(ExitError::new(
                exit_codes::VALIDATION_ERROR,
                format!("{} failed validation", path.display()),
            )
            .into());
        }

        Ok(())
    }
}

/// Conventions the grammar accepts but a tidy changelog follows
fn collect_warnings(changelog: &Changelog) -> Vec<String> {
    let mut warnings = Vec::new();

    if changelog.unreleased().is_none() {
        warnings.push("No [Unreleased] entry".to_string());
    }

    for entry in &changelog.entries {
        if !entry.version.is_unreleased() && entry.date.is_none() {
            warnings.push(format!("Release {} has no date", entry.version));
        }
        for change in entry.changes.iter().filter(|c| c.is_empty()) {
            warnings.push(format!(
                "Empty {} section in {}",
                change.change_type, entry.version
            ));
        }
    }

    warnings
}
