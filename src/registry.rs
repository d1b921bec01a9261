//! Compendium category registry.
//!
//! Maps each supported category (the XML element of its entries) to the
//! functions that extract and format it. Categories without an entry here
//! (spells, monsters, races, ...) are not converted.

use crate::parser::RawNode;
use crate::pipeline::extract::extract_item;
use crate::pipeline::format::{format_item, FormatError};
use crate::types::{CardRecord, ItemRecord};

/// Conversion functions for one category.
#[derive(Clone, Copy)]
pub struct Category {
    /// Element name of each entry, e.g. `item`.
    pub name: &'static str,
    /// Plural used in status output, e.g. `items`.
    pub output: &'static str,
    pub extract: fn(&RawNode) -> ItemRecord,
    pub format: fn(&ItemRecord) -> Result<CardRecord, FormatError>,
}

impl std::fmt::Debug for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Category")
            .field("name", &self.name)
            .field("output", &self.output)
            .finish()
    }
}

/// All implemented categories, in default processing order.
pub static CATEGORIES: &[Category] = &[Category {
    name: "item",
    output: "items",
    extract: extract_item,
    format: format_item,
}];

/// Look up a category by name.
pub fn category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Names of all implemented categories.
pub fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.name).collect()
}
