//! Fmt command - Rewrite the changelog in canonical form

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use keepachangelog::{split_preamble, Changelog};

use crate::cli::{output, Cli};
use crate::error::ExitError;
use crate::exit_codes;

/// Rewrite the changelog in canonical form
///
/// Text before the first entry header is kept as is. Prose inside entries
/// is not part of the grammar and is dropped.
#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Verify formatting without applying changes (for CI / hooks)
    #[arg(long)]
    pub check: bool,
}

impl FmtCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(check = self.check, "executing fmt command");
        let (path, content) = cli.read_changelog()?;

        let formatted = format_document(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if formatted == content {
            debug!(path = %path.display(), "changelog already canonical");
            if !cli.quiet {
                output::success("Changelog is already formatted");
            }
            return Ok(());
        }

        if self.check {
            if !cli.quiet {
                output::warning(&format!(
                    "{} is not in canonical form (run `kacl fmt`)",
                    path.display()
                ));
            }
            return Err(ExitError::new(
                exit_codes::CHECK_FAILED,
                format!("{} is not in canonical form", path.display()),
            )
            .into());
        }

        std::fs::write(&path, &formatted)
            .with_context(|| format!("failed to write {}", path.display()))?;

        if !cli.quiet {
            output::success(&format!(
                "Formatted {}",
                output::path_style().apply_to(path.display())
            ));
        }

        Ok(())
    }
}

/// Canonical form of a whole document, preamble included
pub(crate) fn format_document(content: &str) -> keepachangelog::Result<String> {
    // The whole document must parse, stray headers in the preamble included
    let changelog = Changelog::parse(content)?;
    let (preamble, _) = split_preamble(content);
    Ok(join_preamble(preamble, &changelog.unparse()))
}

/// Join a preamble and rendered entries with exactly one blank line
pub(crate) fn join_preamble(preamble: &str, rendered: &str) -> String {
    let preamble = preamble.trim_end();
    if preamble.is_empty() {
        rendered.to_string()
    } else if rendered.is_empty() {
        format!("{}\n", preamble)
    } else {
        format!("{}\n\n{}", preamble, rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_document_keeps_preamble() {
        let input = "# Changelog\n\nAll notable changes.\n\n\n## [Unreleased]\n### Added\n* thing\n";
        let formatted = format_document(input).unwrap();
        assert_eq!(
            formatted,
            "# Changelog\n\nAll notable changes.\n\n## [Unreleased]\n\n### Added\n\n- thing\n\n"
        );
    }

    #[test]
    fn test_format_document_is_fixed_point() {
        let input = "# Changelog\n## [1.0.0] - 2024-01-15\nprose\n### Fixed\n- a\n- b\n";
        let once = format_document(input).unwrap();
        assert_eq!(format_document(&once).unwrap(), once);
    }

    #[test]
    fn test_format_document_without_entries() {
        assert_eq!(format_document("# Changelog\n\n").unwrap(), "# Changelog\n");
        assert_eq!(format_document("").unwrap(), "");
    }

    #[test]
    fn test_format_document_rejects_invalid() {
        assert!(format_document("# Changelog\n## [Unreleased]\n### Banana\n").is_err());
    }

    #[test]
    fn test_format_document_rejects_section_in_preamble() {
        assert!(format_document("# Changelog\n### Added\n- a\n").is_err());
    }

    fn command(path: &std::path::Path) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(["kacl", "-q", "-f", path.to_str().unwrap(), "fmt"]).unwrap()
    }

    #[test]
    fn test_execute_rewrites_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "# Changelog\n## [Unreleased]\n### Added\n* thing\n").unwrap();

        FmtCommand { check: false }.execute(&command(&path)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Changelog\n\n## [Unreleased]\n\n### Added\n\n- thing\n\n"
        );
    }

    #[test]
    fn test_execute_check_reports_non_canonical_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        let original = "## [Unreleased]\n### Added\n- thing\n";
        std::fs::write(&path, original).unwrap();

        let err = FmtCommand { check: true }
            .execute(&command(&path))
            .unwrap_err();
        let exit = err.downcast_ref::<ExitError>().unwrap();
        assert_eq!(exit.code, exit_codes::CHECK_FAILED);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_execute_check_accepts_canonical_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "# Changelog\n\n## [Unreleased]\n\n").unwrap();

        assert!(FmtCommand { check: true }.execute(&command(&path)).is_ok());
    }

    #[test]
    fn test_execute_invalid_file_is_plain_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "- item\n").unwrap();

        let err = FmtCommand { check: false }
            .execute(&command(&path))
            .unwrap_err();
        assert!(err.downcast_ref::<ExitError>().is_none());
    }
}
