//! The card record written to rpg-card JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a card content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Property,
    Text,
}

impl LineKind {
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Property => "property",
            LineKind::Text => "text",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A finished card: title, filter tags and display lines.
///
/// Each content line is `"<kind> | ..."`, e.g. `"property | AC | 16"` or
/// `"text | Some effect."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub title: String,
    pub tags: Vec<String>,
    pub contents: Vec<String>,
}

impl CardRecord {
    /// Create a card with no content lines.
    pub fn new(title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            tags,
            contents: Vec::new(),
        }
    }

    /// Append a `property | <label> | <value>` line.
    pub fn push_property(&mut self, label: &str, value: &str) {
        self.contents
            .push(format!("{} | {} | {}", LineKind::Property, label, value));
    }

    /// Append a `text | <line>` line.
    pub fn push_text(&mut self, line: &str) {
        self.contents.push(format!("{} | {}", LineKind::Text, line));
    }
}
