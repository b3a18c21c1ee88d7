//! Changelog document

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};
use crate::formatter::render;
use crate::parser::parse;
use crate::types::{Entry, VersionRef};

/// A whole changelog: its entries in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    /// Entries, newest first by convention; never reordered here
    pub entries: Vec<Entry>,
}

impl Changelog {
    /// Create a changelog from entries
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Parse a changelog document
    pub fn parse(input: &str) -> Result<Self> {
        parse(input).map(Self::new)
    }

    /// Render the canonical text of this changelog
    pub fn unparse(&self) -> String {
        render(&self.entries)
    }

    /// The first `[Unreleased]` entry
    pub fn unreleased(&self) -> Option<&Entry> {
        self.entries.iter().find(|e| e.version.is_unreleased())
    }

    /// The first entry with a concrete version, in document order
    pub fn latest_release(&self) -> Option<&Entry> {
        self.entries.iter().find(|e| !e.version.is_unreleased())
    }

    /// The first entry labelled `version`
    pub fn find(&self, version: &VersionRef) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.version == version)
    }

    /// Mutable access to the first entry labelled `version`
    pub fn find_mut(&mut self, version: &VersionRef) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| &e.version == version)
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Changelog {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Changelog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unparse())
    }
}
