//! Filter tag derivation.
//!
//! Tags let the card viewer filter a deck. Each `TagSource` reads one field
//! of an extracted record:
//! - `source` - the sourcebook named on the last `Source:` text line
//! - `type` - the item type label
//! - `property` - each property label
//!
//! A failing source is reported and skipped; the others still contribute.

use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::{Diagnostic, DiagnosticReport};
use crate::types::{Field, FieldValue, ItemRecord};

/// Marker that introduces a sourcebook reference in a text paragraph.
pub const SOURCE_MARKER: &str = "Source:";

/// A field that can be turned into tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSource {
    Source,
    Type,
    Property,
}

impl TagSource {
    /// The record field the tags are read from.
    pub fn field(&self) -> Field {
        match self {
            TagSource::Source => Field::Text,
            TagSource::Type => Field::Type,
            TagSource::Property => Field::Property,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TagSource::Source => "source",
            TagSource::Type => "type",
            TagSource::Property => "property",
        }
    }
}

impl fmt::Display for TagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a sourcebook name becomes a tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcebookStyle {
    /// Initials of each word: "Player's Handbook" -> "PH".
    #[default]
    Initials,
    /// The full book name: "Player's Handbook".
    Full,
}

/// A field held a value the tag source cannot read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} values in '{field}', found a {found} value")]
pub struct TagError {
    pub field: Field,
    pub expected: &'static str,
    pub found: &'static str,
}

impl TagError {
    fn unexpected(field: Field, expected: &'static str, value: &FieldValue) -> Self {
        Self {
            field,
            expected,
            found: value.kind(),
        }
    }
}

/// Derive tags for a record from the selected sources.
///
/// Missing fields contribute nothing. A source that fails is reported to
/// `report` under the record's name and contributes nothing.
pub fn derive_tags(
    record: &ItemRecord,
    sources: &[TagSource],
    style: SourcebookStyle,
    report: &mut DiagnosticReport,
) -> Vec<String> {
    let mut tags = Vec::new();

    for source in sources {
        match tags_for(record, *source, style) {
            Ok(values) => tags.extend(values),
            Err(err) => report.push(
                Diagnostic::warning(format!("cards::tag::{}", source), err.to_string())
                    .for_item(record.name().unwrap_or("<unnamed>")),
            ),
        }
    }

    tags
}

/// Tags contributed by a single source.
pub fn tags_for(
    record: &ItemRecord,
    source: TagSource,
    style: SourcebookStyle,
) -> Result<Vec<String>, TagError> {
    match source {
        TagSource::Source => source_tags(record, style),
        TagSource::Type => type_tags(record),
        TagSource::Property => property_tags(record),
    }
}

fn source_tags(record: &ItemRecord, style: SourcebookStyle) -> Result<Vec<String>, TagError> {
    let mut paragraphs = Vec::new();
    for value in record.values(Field::Text) {
        match value {
            FieldValue::Text(line) => paragraphs.push(line.as_str()),
            FieldValue::Empty => {}
            other => return Err(TagError::unexpected(Field::Text, "text", other)),
        }
    }

    Ok(source_line(paragraphs)
        .map(|line| sourcebook(&line, style))
        .filter(|book| !book.is_empty())
        .into_iter()
        .collect())
}

fn type_tags(record: &ItemRecord) -> Result<Vec<String>, TagError> {
    let mut tags = Vec::new();
    for value in record.values(Field::Type) {
        match value {
            FieldValue::Text(label) => tags.push(label.clone()),
            FieldValue::Empty => {}
            other => return Err(TagError::unexpected(Field::Type, "text", other)),
        }
    }
    Ok(tags)
}

fn property_tags(record: &ItemRecord) -> Result<Vec<String>, TagError> {
    let mut tags = Vec::new();
    for value in record.values(Field::Property) {
        match value {
            FieldValue::List(labels) => tags.extend(labels.iter().cloned()),
            other => return Err(TagError::unexpected(Field::Property, "list", other)),
        }
    }
    Ok(tags)
}

/// Find the sourcebook reference among text paragraphs.
///
/// Returns the last paragraph containing `Source:`, with the marker removed
/// and surrounding whitespace trimmed.
pub fn source_line<'a>(paragraphs: impl IntoIterator<Item = &'a str>) -> Option<String> {
    paragraphs
        .into_iter()
        .filter(|line| line.contains(SOURCE_MARKER))
        .last()
        .map(|line| line.replace(SOURCE_MARKER, "").trim().to_string())
}

/// Reduce a source reference ("Player's Handbook, p. 150") to a book tag.
pub fn sourcebook(source: &str, style: SourcebookStyle) -> String {
    let book = source.split(',').next().unwrap_or_default();

    match style {
        SourcebookStyle::Initials => book
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect(),
        SourcebookStyle::Full => book.trim().to_string(),
    }
}

/// Lowercase tags and drop repeats, keeping first occurrences in order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|tag| tag.to_lowercase())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
