//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{Change, Entry};

/// Canonical Markdown renderer
///
/// Output depends only on the model: one `## [...]` header per entry, one
/// `### ` header per change group, one `- ` line per item, each block
/// followed by a blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    /// Format a single entry
    pub fn format_entry(&self, entry: &Entry) -> String {
        let mut output = String::new();
        self.write_entry(&mut output, entry);
        output
    }

    fn write_entry(&self, output: &mut String, entry: &Entry) {
        // Version header
        output.push_str(&format!("## [{}]", entry.version));
        if let Some(date) = &entry.date {
            output.push_str(&format!(" - {}", date.format("%Y-%m-%d")));
        }
        output.push_str("\n\n");

        for change in &entry.changes {
            self.write_change(output, change);
        }
    }

    fn write_change(&self, output: &mut String, change: &Change) {
        output.push_str(&format!("### {}\n\n", change.change_type));

        for item in &change.items {
            output.push_str(&format!("- {}\n", item));
        }

        output.push('\n');
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, entries), fields(entry_count = entries.len()))]
    fn format(&self, entries: &[Entry]) -> String {
        let mut output = String::new();

        for entry in entries {
            self.write_entry(&mut output, entry);
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeType;
    use chrono::NaiveDate;
    use semver::Version;

    #[test]
    fn test_format_unreleased_without_date() {
        let mut entry = Entry::unreleased();
        entry.add_change(Change::new(ChangeType::Added).with_items(["New feature"]));

        let output = MarkdownFormatter::new().format(&[entry]);
        assert_eq!(output, "## [Unreleased]\n\n### Added\n\n- New feature\n\n");
    }

    #[test]
    fn test_format_dated_release() {
        let mut entry = Entry::new(Version::new(1, 0, 0))
            .with_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        entry.add_change(Change::new(ChangeType::Fixed).with_items(["Bug fix", "Another fix"]));

        let output = MarkdownFormatter::new().format(&[entry]);
        assert_eq!(
            output,
            "## [1.0.0] - 2024-01-05\n\n### Fixed\n\n- Bug fix\n- Another fix\n\n"
        );
    }

    #[test]
    fn test_format_empty_section() {
        let mut entry = Entry::unreleased();
        entry.add_change(Change::new(ChangeType::Deprecated));

        let output = MarkdownFormatter::new().format_entry(&entry);
        assert_eq!(output, "## [Unreleased]\n\n### Deprecated\n\n\n");
    }

    #[test]
    fn test_format_entry_without_changes() {
        let entry = Entry::new(Version::parse("2.0.0-rc.1").unwrap());
        let output = MarkdownFormatter::new().format_entry(&entry);
        assert_eq!(output, "## [2.0.0-rc.1]\n\n");
    }

    #[test]
    fn test_format_keeps_order() {
        let mut first = Entry::new(Version::new(0, 9, 0));
        first.add_change(Change::new(ChangeType::Security).with_items(["s"]));
        first.add_change(Change::new(ChangeType::Added).with_items(["a"]));
        let second = Entry::unreleased();

        let output = MarkdownFormatter::new().format(&[first, second]);
        let headers: Vec<&str> = output.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(
            headers,
            vec!["## [0.9.0]", "### Security", "### Added", "## [Unreleased]"]
        );
    }

    #[test]
    fn test_format_nothing() {
        assert_eq!(MarkdownFormatter::new().format(&[]), "");
    }

    #[test]
    fn test_extension() {
        assert_eq!(MarkdownFormatter::new().extension(), "md");
    }
}
