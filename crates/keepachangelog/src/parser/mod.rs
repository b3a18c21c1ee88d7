//! Changelog parsing
//!
//! A single forward pass over the input lines. State is one pending entry and
//! one pending change group; a group is flushed into its entry when the next
//! header arrives or the input ends.

mod line;

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument, trace};

use crate::error::{ParseError, Result};
use crate::types::{Change, ChangeType, Entry, VersionRef};
use line::Line;

/// Shape check for release dates; chrono alone accepts unpadded fields
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex"));

/// Parse a changelog document into its entries.
///
/// Fails on the first grammar violation; no partial result is returned.
/// Input without any entry header yields an empty list.
#[instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Result<Vec<Entry>> {
    let mut state = ParserState::default();

    for (idx, text) in input.lines().enumerate() {
        state.feed(idx + 1, text)?;
    }

    let entries = state.finish();
    debug!(entry_count = entries.len(), "changelog parsed");
    Ok(entries)
}

/// Parse a `YYYY-MM-DD` release date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if !DATE_REGEX.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Split a document at its first entry header.
///
/// The first half is the preamble (title, introduction); the renderer never
/// produces one, so callers that rewrite a file keep it themselves.
pub fn split_preamble(input: &str) -> (&str, &str) {
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        let text = line.trim_end_matches(['\r', '\n']);
        if matches!(Line::classify(text), Line::EntryHeader { .. }) {
            return input.split_at(offset);
        }
        offset += line.len();
    }
    (input, "")
}

#[derive(Debug, Default)]
struct ParserState {
    entries: Vec<Entry>,
    current_entry: Option<Entry>,
    current_change: Option<Change>,
}

impl ParserState {
    fn feed(&mut self, line_num: usize, text: &str) -> Result<()> {
        match Line::classify(text) {
            Line::EntryHeader { label, date } => self.handle_entry_header(line_num, label, date),
            Line::SectionHeader { name } => self.handle_section_header(line_num, text, name),
            Line::Item { text: item } => self.handle_item(line_num, text, item),
            Line::Other => Ok(()),
        }
    }

    fn handle_entry_header(
        &mut self,
        line_num: usize,
        label: &str,
        date: Option<&str>,
    ) -> Result<()> {
        self.close_entry();

        let version = label
            .parse::<VersionRef>()
            .map_err(|source| ParseError::InvalidVersion {
                line: line_num,
                version: label.to_string(),
                source,
            })?;

        let date = date
            .map(|raw| {
                parse_date(raw).ok_or_else(|| ParseError::InvalidDate {
                    line: line_num,
                    date: raw.to_string(),
                })
            })
            .transpose()?;

        trace!(line = line_num, %version, ?date, "entry opened");
        self.current_entry = Some(Entry {
            version,
            date,
            changes: Vec::new(),
        });
        Ok(())
    }

    fn handle_section_header(&mut self, line_num: usize, text: &str, name: &str) -> Result<()> {
        let Some(entry) = self.current_entry.as_mut() else {
            return Err(ParseError::SectionOutsideEntry {
                line: line_num,
                text: text.to_string(),
            });
        };

        let change_type = name
            .parse::<ChangeType>()
            .map_err(|_| ParseError::UnknownSection {
                line: line_num,
                name: name.to_string(),
            })?;

        if let Some(change) = self.current_change.replace(Change::new(change_type)) {
            entry.changes.push(change);
        }
        trace!(line = line_num, %change_type, "section opened");
        Ok(())
    }

    fn handle_item(&mut self, line_num: usize, text: &str, item: &str) -> Result<()> {
        let Some(change) = self.current_change.as_mut() else {
            return Err(ParseError::ItemOutsideSection {
                line: line_num,
                text: text.to_string(),
            });
        };
        change.add_item(item);
        Ok(())
    }

    /// Flush the open group into the open entry and push the entry
    fn close_entry(&mut self) {
        let change = self.current_change.take();
        if let Some(mut entry) = self.current_entry.take() {
            entry.changes.extend(change);
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<Entry> {
        self.close_entry();
        self.entries
    }
}
