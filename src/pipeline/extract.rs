//! Field extraction from compendium entries.
//!
//! Each category has a table of `FieldRule`s. A rule names a field and the
//! transform applied to every element with that field's tag anywhere in the
//! entry's subtree. Occurrences accumulate in document order.

use crate::parser::RawNode;
use crate::types::codes::{CodeTable, DAMAGE_TYPES, ITEM_PROPERTIES, ITEM_TYPES};
use crate::types::{Field, FieldValue, ItemRecord};

/// Turns one field element into a value.
pub type Transform = fn(&RawNode) -> FieldValue;

/// Extraction rule for one field.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub transform: Transform,
}

impl FieldRule {
    const fn new(field: Field, transform: Transform) -> Self {
        Self { field, transform }
    }
}

/// Rules for `<item>` entries.
pub static ITEM_RULES: &[FieldRule] = &[
    FieldRule::new(Field::Name, raw_text),
    FieldRule::new(Field::Type, item_type),
    FieldRule::new(Field::Weight, raw_text),
    FieldRule::new(Field::Ac, raw_text),
    FieldRule::new(Field::Strength, raw_text),
    FieldRule::new(Field::Stealth, presence),
    FieldRule::new(Field::Dmg1, raw_text),
    FieldRule::new(Field::Dmg2, raw_text),
    FieldRule::new(Field::DmgType, damage_type),
    FieldRule::new(Field::Property, properties),
    FieldRule::new(Field::Range, raw_text),
    FieldRule::new(Field::Roll, raw_text),
    FieldRule::new(Field::Modifier, modifier),
    FieldRule::new(Field::Text, paragraph),
];

/// Apply a rule table to an entry node.
///
/// Fields with no matching element are absent from the record.
pub fn extract(node: &RawNode, rules: &[FieldRule]) -> ItemRecord {
    let mut record = ItemRecord::new();

    for rule in rules {
        for element in node.find_all(rule.field.element()) {
            record.push(rule.field, (rule.transform)(element));
        }
    }

    record
}

/// Extract an `<item>` entry.
pub fn extract_item(node: &RawNode) -> ItemRecord {
    extract(node, ITEM_RULES)
}

fn raw_text(node: &RawNode) -> FieldValue {
    match &node.text {
        Some(text) => FieldValue::Text(text.clone()),
        None => FieldValue::Empty,
    }
}

fn coded(node: &RawNode, table: &CodeTable) -> FieldValue {
    match &node.text {
        Some(code) => FieldValue::Text(table.lookup(code.trim()).to_string()),
        None => FieldValue::Empty,
    }
}

fn item_type(node: &RawNode) -> FieldValue {
    coded(node, &ITEM_TYPES)
}

fn damage_type(node: &RawNode) -> FieldValue {
    coded(node, &DAMAGE_TYPES)
}

fn properties(node: &RawNode) -> FieldValue {
    let labels = node
        .text
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| ITEM_PROPERTIES.lookup(code).to_string())
        .collect();

    FieldValue::List(labels)
}

fn modifier(node: &RawNode) -> FieldValue {
    FieldValue::Modifier {
        category: node.attr("category").unwrap_or_default().to_string(),
        text: node.text.clone().unwrap_or_default(),
    }
}

fn presence(_node: &RawNode) -> FieldValue {
    FieldValue::Flag(true)
}

fn paragraph(node: &RawNode) -> FieldValue {
    match &node.text {
        Some(text) => FieldValue::Text(text.trim().to_string()),
        None => FieldValue::Empty,
    }
}
