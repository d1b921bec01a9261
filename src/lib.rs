//! compendium-cards - Compendium XML to rpg-card JSON converter
//!
//! A library for turning tabletop compendium entries (items, with spells and
//! monsters to follow) into flat `{title, tags, contents}` card records for
//! the rpg-cards viewer.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod registry;
pub mod types;

pub use config::Manifest;
pub use diagnostics::{Diagnostic, DiagnosticReport, Severity};
pub use error::{CardError, Result};
pub use parser::{parse_compendium, Compendium, RawNode};
pub use pipeline::{
    convert, convert_entry, to_json, Conversion, ConvertOptions, SourcebookStyle, TagSource,
};
pub use registry::{Category, CATEGORIES};
pub use types::{CardRecord, Field, FieldSlot, FieldValue, ItemRecord};
