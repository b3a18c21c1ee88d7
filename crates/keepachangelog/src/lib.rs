//! Keep a Changelog - parsing and canonical rendering
//!
//! This crate converts documents following the [Keep a Changelog] convention
//! into a typed model and renders that model back to canonical text.
//!
//! [Keep a Changelog]: https://keepachangelog.com

pub mod changelog;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use changelog::Changelog;
pub use error::{ParseError, Result, UnknownChangeType};
pub use formatter::{render, ChangelogFormatter, MarkdownFormatter};
pub use parser::{parse, split_preamble};
pub use types::{Change, ChangeType, Entry, VersionRef, UNRELEASED};
