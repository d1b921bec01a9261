//! Field-level data for compendium records.
//!
//! An `ItemRecord` maps each recognized `Field` to a `FieldSlot`. Extraction
//! always produces `FieldSlot::Seq`, one value per element occurrence; the
//! flatten stage narrows single-valued fields to `FieldSlot::Scalar`.

use std::collections::BTreeMap;
use std::fmt;

/// A recognized compendium field, named after its XML element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Type,
    Modifier,
    Property,
    Ac,
    Dmg1,
    Dmg2,
    DmgType,
    Range,
    Stealth,
    Strength,
    Weight,
    Roll,
    Text,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 14] = [
        Field::Name,
        Field::Type,
        Field::Modifier,
        Field::Property,
        Field::Ac,
        Field::Dmg1,
        Field::Dmg2,
        Field::DmgType,
        Field::Range,
        Field::Stealth,
        Field::Strength,
        Field::Weight,
        Field::Roll,
        Field::Text,
    ];

    /// The XML element name for this field.
    pub fn element(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Type => "type",
            Field::Modifier => "modifier",
            Field::Property => "property",
            Field::Ac => "ac",
            Field::Dmg1 => "dmg1",
            Field::Dmg2 => "dmg2",
            Field::DmgType => "dmgType",
            Field::Range => "range",
            Field::Stealth => "stealth",
            Field::Strength => "strength",
            Field::Weight => "weight",
            Field::Roll => "roll",
            Field::Text => "text",
        }
    }

    /// Look up a field by its exact element name.
    pub fn from_element(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.element() == name)
    }

    /// Fields that keep every occurrence through flattening.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, Field::Text | Field::Modifier)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element())
    }
}

/// The value produced by one occurrence of a field element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text content, possibly after a code lookup.
    Text(String),
    /// The element was present but had no text content.
    Empty,
    /// Presence flag (e.g. `<stealth>`).
    Flag(bool),
    /// A `<modifier category="...">text</modifier>` pair.
    Modifier { category: String, text: String },
    /// A comma-separated code list, each code resolved to a label.
    List(Vec<String>),
}

impl FieldValue {
    /// Get the text content, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short description of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Empty => "empty",
            FieldValue::Flag(_) => "flag",
            FieldValue::Modifier { .. } => "modifier",
            FieldValue::List(_) => "list",
        }
    }
}

/// Storage for one field: a sequence before flattening, a scalar after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSlot {
    Seq(Vec<FieldValue>),
    Scalar(FieldValue),
}

impl FieldSlot {
    /// View the slot's values; a scalar is a sequence of one.
    pub fn values(&self) -> &[FieldValue] {
        match self {
            FieldSlot::Seq(values) => values,
            FieldSlot::Scalar(value) => std::slice::from_ref(value),
        }
    }
}

/// One compendium entry, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    fields: BTreeMap<Field, FieldSlot>,

    /// Filter tags attached by the tag deriver.
    pub tags: Vec<String>,
}

impl ItemRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extracted value to a field's sequence.
    pub fn push(&mut self, field: Field, value: FieldValue) {
        let slot = self
            .fields
            .entry(field)
            .or_insert_with(|| FieldSlot::Seq(Vec::new()));

        if let FieldSlot::Scalar(prev) = slot {
            let prev = std::mem::replace(prev, FieldValue::Empty);
            *slot = FieldSlot::Seq(vec![prev]);
        }
        if let FieldSlot::Seq(values) = slot {
            values.push(value);
        }
    }

    /// Builder-style `push`.
    pub fn with(mut self, field: Field, value: FieldValue) -> Self {
        self.push(field, value);
        self
    }

    /// Builder-style text `push`.
    pub fn with_text(self, field: Field, text: impl Into<String>) -> Self {
        self.with(field, FieldValue::Text(text.into()))
    }

    /// Replace a field's slot.
    pub fn set(&mut self, field: Field, slot: FieldSlot) {
        self.fields.insert(field, slot);
    }

    /// Get a field's slot.
    pub fn get(&self, field: Field) -> Option<&FieldSlot> {
        self.fields.get(&field)
    }

    /// All values of a field (empty if absent).
    pub fn values(&self, field: Field) -> &[FieldValue] {
        self.fields.get(&field).map(FieldSlot::values).unwrap_or(&[])
    }

    /// The scalar value of a flattened field.
    pub fn scalar(&self, field: Field) -> Option<&FieldValue> {
        match self.fields.get(&field) {
            Some(FieldSlot::Scalar(value)) => Some(value),
            _ => None,
        }
    }

    /// The scalar text of a flattened field.
    pub fn scalar_text(&self, field: Field) -> Option<&str> {
        self.scalar(field).and_then(FieldValue::as_text)
    }

    /// The item's name: the last non-empty `name` value.
    pub fn name(&self) -> Option<&str> {
        self.values(Field::Name)
            .iter()
            .rev()
            .filter_map(FieldValue::as_text)
            .find(|s| !s.trim().is_empty())
    }

    /// Text paragraphs, skipping elements without content.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.values(Field::Text).iter().filter_map(FieldValue::as_text)
    }

    /// Iterate over `(field, slot)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldSlot)> {
        self.fields.iter().map(|(f, s)| (*f, s))
    }

    /// Mutable iteration over slots.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Field, &mut FieldSlot)> {
        self.fields.iter_mut().map(|(f, s)| (*f, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_element_names() {
        assert_eq!(Field::DmgType.element(), "dmgType");
        assert_eq!(Field::from_element("dmgType"), Some(Field::DmgType));
        assert_eq!(Field::from_element("dmgtype"), None);
        assert_eq!(Field::from_element("magic"), None);
    }

    #[test]
    fn test_every_field_round_trips_its_element_name() {
        for field in Field::ALL {
            assert_eq!(Field::from_element(field.element()), Some(field));
        }
    }

    #[test]
    fn test_push_accumulates_in_order() {
        let record = ItemRecord::new()
            .with_text(Field::Text, "first")
            .with(Field::Text, FieldValue::Empty)
            .with_text(Field::Text, "second");

        assert_eq!(record.values(Field::Text).len(), 3);
        assert_eq!(record.paragraphs().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_absent_field() {
        let record = ItemRecord::new();
        assert!(record.get(Field::Ac).is_none());
        assert!(record.values(Field::Ac).is_empty());
        assert!(record.scalar(Field::Ac).is_none());
        assert!(record.name().is_none());
    }

    #[test]
    fn test_scalar_only_after_narrowing() {
        let mut record = ItemRecord::new().with_text(Field::Ac, "16");
        assert!(record.scalar(Field::Ac).is_none());

        record.set(Field::Ac, FieldSlot::Scalar(FieldValue::Text("16".to_string())));
        assert_eq!(record.scalar_text(Field::Ac), Some("16"));
        assert_eq!(record.values(Field::Ac).len(), 1);
    }

    #[test]
    fn test_push_onto_scalar_restores_sequence() {
        let mut record = ItemRecord::new();
        record.set(Field::Name, FieldSlot::Scalar(FieldValue::Text("a".to_string())));
        record.push(Field::Name, FieldValue::Text("b".to_string()));

        assert_eq!(
            record.get(Field::Name),
            Some(&FieldSlot::Seq(vec![
                FieldValue::Text("a".to_string()),
                FieldValue::Text("b".to_string()),
            ]))
        );
    }

    #[test]
    fn test_name_skips_blank_values() {
        let record = ItemRecord::new()
            .with_text(Field::Name, "Club")
            .with_text(Field::Name, "  ");
        assert_eq!(record.name(), Some("Club"));
    }
}
