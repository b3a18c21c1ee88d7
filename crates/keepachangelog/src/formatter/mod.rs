//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::types::Entry;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a sequence of entries to string
    fn format(&self, entries: &[Entry]) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// Render entries to canonical Keep a Changelog text
pub fn render(entries: &[Entry]) -> String {
    MarkdownFormatter::new().format(entries)
}
