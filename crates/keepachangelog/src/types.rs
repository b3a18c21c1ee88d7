//! Changelog types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::UnknownChangeType;

/// Label of the entry that collects changes not yet released
pub const UNRELEASED: &str = "Unreleased";

/// Change category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    /// New features
    Added,
    /// Changes in existing functionality
    Changed,
    /// Soon-to-be removed features
    Deprecated,
    /// Now removed features
    Removed,
    /// Bug fixes
    Fixed,
    /// Vulnerability fixes
    Security,
}

impl ChangeType {
    /// All change types, in the order the convention lists them
    pub const ALL: [ChangeType; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
    ];

    /// Canonical section name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = UnknownChangeType;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Added" => Ok(Self::Added),
            "Changed" => Ok(Self::Changed),
            "Deprecated" => Ok(Self::Deprecated),
            "Removed" => Ok(Self::Removed),
            "Fixed" => Ok(Self::Fixed),
            "Security" => Ok(Self::Security),
            _ => Err(UnknownChangeType(s.to_string())),
        }
    }
}

/// The version slot of an entry
///
/// Serialized as its label: `"Unreleased"` or the canonical semver string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum VersionRef {
    /// The `[Unreleased]` entry
    Unreleased,
    /// A released version
    Version(Version),
}

impl VersionRef {
    /// Check if this is the unreleased entry
    pub fn is_unreleased(&self) -> bool {
        matches!(self, Self::Unreleased)
    }

    /// The semantic version, if released
    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::Unreleased => None,
            Self::Version(version) => Some(version),
        }
    }
}

impl fmt::Display for VersionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreleased => f.write_str(UNRELEASED),
            Self::Version(version) => write!(f, "{}", version),
        }
    }
}

impl FromStr for VersionRef {
    type Err = semver::Error;

    /// `Unreleased` is the only non-version label accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNRELEASED {
            Ok(Self::Unreleased)
        } else {
            Version::parse(s).map(Self::Version)
        }
    }
}

impl From<Version> for VersionRef {
    fn from(version: Version) -> Self {
        Self::Version(version)
    }
}

impl From<VersionRef> for String {
    fn from(version: VersionRef) -> Self {
        version.to_string()
    }
}

impl TryFrom<String> for VersionRef {
    type Error = semver::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One category's list of change items within an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Category of the items
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    /// Bullet texts, in source order
    #[serde(default)]
    pub items: Vec<String>,
}

impl Change {
    /// Create an empty change group
    pub fn new(change_type: ChangeType) -> Self {
        Self {
            change_type,
            items: Vec::new(),
        }
    }

    /// Replace the items
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Append an item
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Check if the group has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A changelog entry for a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Version label
    pub version: VersionRef,
    /// Release date.
    ///
    /// Rendered as `YYYY-MM-DD`, so only years 0 through 9999 parse back;
    /// other years render with a sign or extra digits and are rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Change groups, in source order
    #[serde(default)]
    pub changes: Vec<Change>,
}

impl Entry {
    /// Create a new entry for a released version
    pub fn new(version: Version) -> Self {
        Self::with_version(VersionRef::Version(version))
    }

    /// Create a new `[Unreleased]` entry
    pub fn unreleased() -> Self {
        Self::with_version(VersionRef::Unreleased)
    }

    fn with_version(version: VersionRef) -> Self {
        Self {
            version,
            date: None,
            changes: Vec::new(),
        }
    }

    /// Set the date; see [`Entry::date`] for the year range that round-trips
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Add a change group
    ///
    /// Groups are kept as given, even when one of the same type already exists.
    pub fn add_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Iterate over the groups of one type
    pub fn changes_of(&self, change_type: ChangeType) -> impl Iterator<Item = &Change> + '_ {
        self.changes
            .iter()
            .filter(move |c| c.change_type == change_type)
    }
}
