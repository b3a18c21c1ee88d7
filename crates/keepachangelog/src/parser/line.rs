//! Line classification
//!
//! Only three line shapes carry meaning: entry headers, section headers and
//! bullet items. Everything else is prose or whitespace.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for `## [<label>]` with an optional ` - <date>` suffix
static ENTRY_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^## \[(?P<label>[^\]]+)\](?: - (?P<date>.+))?$").expect("Invalid regex")
});

/// Regex for `### <name>`
static SECTION_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s+(?P<name>.+)$").expect("Invalid regex"));

/// Regex for `- <text>` and `* <text>`; only the marker and one space are consumed
static ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*] (?P<text>.*)$").expect("Invalid regex"));

/// Role of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Start of a release entry
    EntryHeader {
        label: &'a str,
        date: Option<&'a str>,
    },
    /// Start of a change category
    SectionHeader { name: &'a str },
    /// One change item
    Item { text: &'a str },
    /// Ignored
    Other,
}

impl<'a> Line<'a> {
    /// Classify a line; the first matching shape wins.
    pub(crate) fn classify(line: &'a str) -> Self {
        if let Some(caps) = ENTRY_HEADER_REGEX.captures(line) {
            if let Some(label) = caps.name("label") {
                return Self::EntryHeader {
                    label: label.as_str(),
                    date: caps.name("date").map(|m| m.as_str()),
                };
            }
        }

        if let Some(name) = SECTION_HEADER_REGEX
            .captures(line)
            .and_then(|caps| caps.name("name"))
        {
            return Self::SectionHeader {
                name: name.as_str(),
            };
        }

        if let Some(text) = ITEM_REGEX.captures(line).and_then(|caps| caps.name("text")) {
            return Self::Item {
                text: text.as_str(),
            };
        }

        Self::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_header() {
        assert_eq!(
            Line::classify("## [Unreleased]"),
            Line::EntryHeader {
                label: "Unreleased",
                date: None
            }
        );
        assert_eq!(
            Line::classify("## [1.0.0] - 2024-01-15"),
            Line::EntryHeader {
                label: "1.0.0",
                date: Some("2024-01-15")
            }
        );
    }

    #[test]
    fn test_entry_header_keeps_malformed_date() {
        assert_eq!(
            Line::classify("## [1.0.0] - soon"),
            Line::EntryHeader {
                label: "1.0.0",
                date: Some("soon")
            }
        );
    }

    #[test]
    fn test_not_entry_headers() {
        assert_eq!(Line::classify("# Changelog"), Line::Other);
        assert_eq!(Line::classify("## []"), Line::Other);
        assert_eq!(Line::classify("## [1.0.0] released"), Line::Other);
        assert_eq!(Line::classify("## Notes"), Line::Other);
    }

    #[test]
    fn test_section_header() {
        assert_eq!(
            Line::classify("### Added"),
            Line::SectionHeader { name: "Added" }
        );
        assert_eq!(
            Line::classify("###   Fixed"),
            Line::SectionHeader { name: "Fixed" }
        );
        assert_eq!(Line::classify("#### Added"), Line::Other);
        assert_eq!(Line::classify("###"), Line::Other);
    }

    #[test]
    fn test_items() {
        assert_eq!(
            Line::classify("- New feature"),
            Line::Item {
                text: "New feature"
            }
        );
        assert_eq!(
            Line::classify("* **bold** `code`"),
            Line::Item {
                text: "**bold** `code`"
            }
        );
        assert_eq!(
            Line::classify("-  indented"),
            Line::Item { text: " indented" }
        );
        assert_eq!(Line::classify("- "), Line::Item { text: "" });
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(Line::classify(""), Line::Other);
        assert_eq!(Line::classify("---"), Line::Other);
        assert_eq!(Line::classify("-no space"), Line::Other);
        assert_eq!(Line::classify("  - nested"), Line::Other);
        assert_eq!(Line::classify("All notable changes."), Line::Other);
    }
}
