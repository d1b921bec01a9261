//! Card formatting.
//!
//! Turns a flattened, tagged record into a `CardRecord`. Property lines come
//! first in a fixed order, followed by one text line per paragraph.

use thiserror::Error;

use crate::types::{CardRecord, Field, FieldValue, ItemRecord};

/// A record could not be turned into a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("entry has no name")]
    MissingName,
}

/// Label for a modifier line whose `category` is blank.
pub const MODIFIER_LABEL: &str = "Modifier";

/// Format a flattened item record as a card.
pub fn format_item(record: &ItemRecord) -> Result<CardRecord, FormatError> {
    let title = record.name().ok_or(FormatError::MissingName)?;
    let mut card = CardRecord::new(title, record.tags.clone());

    push_field(&mut card, record, Field::Type, "Type");

    for value in record.values(Field::Modifier) {
        if let FieldValue::Modifier { category, text } = value {
            let label = match capwords(category) {
                label if label.is_empty() => MODIFIER_LABEL.to_string(),
                label => label,
            };
            card.push_property(&label, &capwords(text));
        }
    }

    if let Some(properties) = property_labels(record) {
        card.push_property("Property", &properties);
    }

    push_field(&mut card, record, Field::Ac, "AC");
    push_field(&mut card, record, Field::Dmg1, "Damage 1H");
    push_field(&mut card, record, Field::Dmg2, "Damage 2H");
    push_field(&mut card, record, Field::DmgType, "DmgType");
    push_field(&mut card, record, Field::Range, "Range");

    if record.scalar(Field::Stealth) == Some(&FieldValue::Flag(true)) {
        card.push_property("Stealth", "Disadvantage");
    }

    push_field(&mut card, record, Field::Strength, "Strength");

    for paragraph in record.paragraphs() {
        card.push_text(paragraph);
    }

    Ok(card)
}

fn push_field(card: &mut CardRecord, record: &ItemRecord, field: Field, label: &str) {
    if let Some(value) = record.scalar_text(field) {
        card.push_property(label, value);
    }
}

fn property_labels(record: &ItemRecord) -> Option<String> {
    match record.scalar(Field::Property)? {
        FieldValue::List(labels) if !labels.is_empty() => Some(labels.join(", ")),
        _ => None,
    }
}

/// Capitalize each whitespace-separated word, collapsing runs of whitespace.
///
/// `"ability score"` -> `"Ability Score"`, `"AC +1"` -> `"Ac +1"`.
pub fn capwords(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::flatten::flatten;
    use crate::types::FieldSlot;
    use pretty_assertions::assert_eq;

    fn longsword() -> ItemRecord {
        flatten(
            ItemRecord::new()
                .with_text(Field::Name, "Longsword")
                .with_text(Field::Type, "Melee weapon")
                .with(
                    Field::Property,
                    FieldValue::List(vec!["Versatile".to_string(), "Two-handed".to_string()]),
                )
                .with_text(Field::Dmg1, "1d8")
                .with_text(Field::Dmg2, "1d10")
                .with_text(Field::DmgType, "Slashing")
                .with_text(Field::Text, "A fine blade.")
                .with(Field::Text, FieldValue::Empty)
                .with_text(Field::Text, "Source: Player's Handbook, p. 149"),
        )
    }

    #[test]
    fn test_format_full_weapon() {
        let card = format_item(&longsword()).unwrap();

        assert_eq!(card.title, "Longsword");
        assert!(card.tags.is_empty());
        assert_eq!(
            card.contents,
            vec![
                "property | Type | Melee weapon",
                "property | Property | Versatile, Two-handed",
                "property | Damage 1H | 1d8",
                "property | Damage 2H | 1d10",
                "property | DmgType | Slashing",
                "text | A fine blade.",
                "text | Source: Player's Handbook, p. 149",
            ]
        );
    }

    #[test]
    fn test_format_armor_order() {
        let record = flatten(
            ItemRecord::new()
                .with_text(Field::Name, "Plate")
                .with_text(Field::Type, "Heavy Armor")
                .with_text(Field::Strength, "15")
                .with(Field::Stealth, FieldValue::Flag(true))
                .with_text(Field::Ac, "18")
                .with(
                    Field::Modifier,
                    FieldValue::Modifier {
                        category: "bonus".to_string(),
                        text: "ac +1".to_string(),
                    },
                )
                .with_text(Field::Range, "5"),
        );
        let card = format_item(&record).unwrap();

        assert_eq!(
            card.contents,
            vec![
                "property | Type | Heavy Armor",
                "property | Bonus | Ac +1",
                "property | AC | 18",
                "property | Range | 5",
                "property | Stealth | Disadvantage",
                "property | Strength | 15",
            ]
        );
    }

    #[test]
    fn test_format_minimal_item() {
        let record = flatten(
            ItemRecord::new()
                .with_text(Field::Name, "Rope")
                .with_text(Field::Type, "Adventuring gear")
                .with_text(Field::Text, "50 feet."),
        );
        let card = format_item(&record).unwrap();

        assert_eq!(
            card.contents,
            vec!["property | Type | Adventuring gear", "text | 50 feet."]
        );
    }

    #[test]
    fn test_empty_property_list_omitted() {
        let record = flatten(
            ItemRecord::new()
                .with_text(Field::Name, "Stick")
                .with(Field::Property, FieldValue::List(vec![])),
        );
        let card = format_item(&record).unwrap();
        assert!(card.contents.is_empty());
    }

    #[test]
    fn test_modifier_without_category_uses_default_label() {
        let record = flatten(
            ItemRecord::new().with_text(Field::Name, "Amulet").with(
                Field::Modifier,
                FieldValue::Modifier {
                    category: "  ".to_string(),
                    text: "wisdom +1".to_string(),
                },
            ),
        );
        let card = format_item(&record).unwrap();
        assert_eq!(card.contents, vec!["property | Modifier | Wisdom +1"]);
    }

    #[test]
    fn test_property_text_value_omitted() {
        let mut record = ItemRecord::new().with_text(Field::Name, "Whip");
        record.set(
            Field::Property,
            FieldSlot::Scalar(FieldValue::Text("Finesse".to_string())),
        );
        let card = format_item(&record).unwrap();
        assert!(card.contents.is_empty());
    }

    #[test]
    fn test_stealth_false_omitted() {
        let record = flatten(
            ItemRecord::new()
                .with_text(Field::Name, "Leather")
                .with(Field::Stealth, FieldValue::Flag(false)),
        );
        let card = format_item(&record).unwrap();
        assert!(card.contents.is_empty());
    }

    #[test]
    fn test_tags_are_copied() {
        let mut record = longsword();
        record.tags = vec!["ph".to_string()];
        let card = format_item(&record).unwrap();
        assert_eq!(card.tags, vec!["ph"]);
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let record = flatten(ItemRecord::new().with_text(Field::Type, "Ring"));
        assert_eq!(format_item(&record), Err(FormatError::MissingName));

        let blank = flatten(ItemRecord::new().with(Field::Name, FieldValue::Empty));
        assert_eq!(format_item(&blank), Err(FormatError::MissingName));
    }

    #[test]
    fn test_capwords() {
        assert_eq!(capwords("ability score"), "Ability Score");
        assert_eq!(capwords("  strength   +2 "), "Strength +2");
        assert_eq!(capwords("AC +1"), "Ac +1");
        assert_eq!(capwords(""), "");
    }
}
