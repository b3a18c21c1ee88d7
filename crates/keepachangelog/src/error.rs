//! Error types

use thiserror::Error;

/// Result type alias using ParseError
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error raised when a changelog document violates the grammar.
///
/// Parsing stops at the first violation, so a `ParseError` always describes
/// the whole input as invalid. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Entry header label is neither `Unreleased` nor a semantic version
    #[error("line {line}: invalid version '{version}': {source}")]
    InvalidVersion {
        line: usize,
        version: String,
        #[source]
        source: semver::Error,
    },

    /// Entry header date is not a `YYYY-MM-DD` calendar date
    #[error("line {line}: can't parse date '{date}'")]
    InvalidDate { line: usize, date: String },

    /// `### ` header seen before any `## [...]` header
    #[error("line {line}: section found outside of entry: {text}")]
    SectionOutsideEntry { line: usize, text: String },

    /// `### ` header naming something other than the six categories
    #[error("line {line}: unknown section '{name}'")]
    UnknownSection { line: usize, name: String },

    /// Bullet seen while no section is open
    #[error("line {line}: change item found outside of section: {text}")]
    ItemOutsideSection { line: usize, text: String },
}

impl ParseError {
    /// Line of the input the error was raised on
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidVersion { line, .. }
            | Self::InvalidDate { line, .. }
            | Self::SectionOutsideEntry { line, .. }
            | Self::UnknownSection { line, .. }
            | Self::ItemOutsideSection { line, .. } => *line,
        }
    }
}

/// A category name that is not one of the six change types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown change type '{0}'")]
pub struct UnknownChangeType(pub String);
