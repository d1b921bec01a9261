//! Conversion pipeline.
//!
//! Every compendium entry goes through the same stages:
//!
//! ```text
//! extract -> derive tags -> flatten -> normalize tags -> format
//! ```
//!
//! Entries are independent. Output cards keep the order of the input
//! entries, category by category in the order requested.
//!
//! # Usage
//!
//! ```ignore
//! use compendium_cards::parser::parse_compendium;
//! use compendium_cards::pipeline::{convert, to_json, ConvertOptions};
//!
//! let compendium = parse_compendium(&source)?;
//! let conversion = convert(&compendium, &ConvertOptions::default())?;
//! let json = to_json(&conversion.cards, 4)?;
//! ```

pub mod extract;
pub mod flatten;
pub mod format;
pub mod tags;

use serde::Serialize;

use crate::diagnostics::{Diagnostic, DiagnosticReport};
use crate::error::{CardError, Result};
use crate::parser::{Compendium, RawNode};
use crate::registry::{self, Category};
use crate::types::CardRecord;

pub use extract::{extract, extract_item, FieldRule, ITEM_RULES};
pub use flatten::flatten;
pub use format::{capwords, format_item, FormatError};
pub use tags::{
    derive_tags, normalize_tags, source_line, sourcebook, SourcebookStyle, TagSource,
};

/// Default JSON indentation width.
pub const DEFAULT_INDENT: usize = 4;

/// Options controlling a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Categories to convert; empty means every implemented category.
    pub categories: Vec<String>,
    /// Fields to derive tags from; empty means no tags.
    pub tags: Vec<TagSource>,
    pub sourcebook: SourcebookStyle,
}

impl ConvertOptions {
    /// Resolve the requested categories against the registry.
    pub fn resolve_categories(&self) -> Result<Vec<&'static Category>> {
        if self.categories.is_empty() {
            return Ok(registry::CATEGORIES.iter().collect());
        }

        self.categories
            .iter()
            .map(|name| {
                registry::category(name).ok_or_else(|| CardError::Config {
                    message: format!("Unknown category '{}'", name),
                    help: Some(format!(
                        "Supported categories: {}",
                        registry::category_names().join(", ")
                    )),
                })
            })
            .collect()
    }
}

/// Result of converting a compendium.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub cards: Vec<CardRecord>,
    /// Per-entry problems; entries with errors are not in `cards`.
    pub diagnostics: DiagnosticReport,
    /// Cards produced per category, in processing order.
    pub counts: Vec<(&'static str, usize)>,
}

/// Convert every entry of the selected categories.
pub fn convert(compendium: &Compendium, options: &ConvertOptions) -> Result<Conversion> {
    let categories = options.resolve_categories()?;
    let mut conversion = Conversion::default();

    for category in categories {
        let before = conversion.cards.len();

        for (index, node) in compendium.entries(category.name).enumerate() {
            let card = convert_entry(category, node, options, &mut conversion.diagnostics)
                .map_err(|d| d.for_item(format!("{} #{}", category.name, index + 1)));

            match card {
                Ok(card) => conversion.cards.push(card),
                Err(diagnostic) => conversion.diagnostics.push(diagnostic),
            }
        }

        conversion
            .counts
            .push((category.output, conversion.cards.len() - before));
    }

    Ok(conversion)
}

/// Run one entry through the pipeline.
///
/// Tag failures are pushed to `report` and the card is still produced; a
/// card that cannot be formatted comes back as an error diagnostic.
pub fn convert_entry(
    category: &Category,
    node: &RawNode,
    options: &ConvertOptions,
    report: &mut DiagnosticReport,
) -> std::result::Result<CardRecord, Diagnostic> {
    let mut record = (category.extract)(node);

    if !options.tags.is_empty() {
        record.tags = derive_tags(&record, &options.tags, options.sourcebook, report);
    }

    let mut record = flatten(record);
    record.tags = normalize_tags(&record.tags);

    (category.format)(&record).map_err(|err| {
        Diagnostic::error(format!("cards::{}::format", category.name), err.to_string())
    })
}

/// Serialize cards as a pretty-printed JSON array.
pub fn to_json(cards: &[CardRecord], indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());

    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    cards.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_compendium;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = r#"<compendium version="5">
  <item>
    <name>Club</name>
    <type>M</type>
    <weight>2</weight>
    <dmg1>1d4</dmg1>
    <dmgType>B</dmgType>
    <property>L</property>
    <text>A simple club.</text>
    <text/>
    <text>Source: Player's Handbook, p. 149</text>
  </item>
  <item>
    <name>Quarterstaff</name>
    <type>M</type>
    <property>V,2H</property>
    <text>Source: Player's Handbook, p. 149</text>
  </item>
  <item>
    <type>G</type>
  </item>
</compendium>"#;

    fn compendium() -> Compendium {
        parse_compendium(SOURCE).unwrap()
    }

    #[test]
    fn test_convert_without_tags() {
        let conversion = convert(&compendium(), &ConvertOptions::default()).unwrap();

        assert_eq!(conversion.cards.len(), 2);
        assert_eq!(conversion.cards[0].title, "Club");
        assert!(conversion.cards[0].tags.is_empty());
        assert_eq!(
            conversion.cards[0].contents,
            vec![
                "property | Type | Melee weapon",
                "property | Property | Light",
                "property | Damage 1H | 1d4",
                "property | DmgType | Bludgeoning",
                "text | A simple club.",
                "text | Source: Player's Handbook, p. 149",
            ]
        );
        assert_eq!(conversion.counts, vec![("items", 2)]);
    }

    #[test]
    fn test_convert_with_tags() {
        let options = ConvertOptions {
            tags: vec![TagSource::Source, TagSource::Type, TagSource::Property],
            ..Default::default()
        };
        let conversion = convert(&compendium(), &options).unwrap();

        assert_eq!(conversion.cards[0].tags, vec!["ph", "melee weapon", "light"]);
        assert_eq!(
            conversion.cards[1].tags,
            vec!["ph", "melee weapon", "versatile", "two-handed"]
        );
        assert!(conversion.cards[1]
            .contents
            .contains(&"property | Property | Versatile, Two-handed".to_string()));
    }

    #[test]
    fn test_full_sourcebook_style() {
        let options = ConvertOptions {
            tags: vec![TagSource::Source],
            sourcebook: SourcebookStyle::Full,
            ..Default::default()
        };
        let conversion = convert(&compendium(), &options).unwrap();

        assert_eq!(conversion.cards[0].tags, vec!["player's handbook"]);
    }

    #[test]
    fn test_unnamed_entry_is_skipped_and_reported() {
        let conversion = convert(&compendium(), &ConvertOptions::default()).unwrap();

        assert_eq!(conversion.diagnostics.error_count(), 1);
        let diagnostic = conversion.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.code, "cards::item::format");
        assert_eq!(diagnostic.item.as_deref(), Some("item #3"));
    }

    #[test]
    fn test_output_order_matches_input() {
        let source = r#"<compendium version="5">
  <item><name>Potion</name><type>P</type><text>First.</text></item>
  <item><name>Potion</name><type>P</type><text>Second.</text></item>
</compendium>"#;
        let compendium = parse_compendium(source).unwrap();
        let conversion = convert(&compendium, &ConvertOptions::default()).unwrap();

        let texts: Vec<&str> = conversion
            .cards
            .iter()
            .map(|c| c.contents.last().unwrap().as_str())
            .collect();
        assert_eq!(texts, vec!["text | First.", "text | Second."]);
    }

    #[test]
    fn test_unknown_category() {
        let options = ConvertOptions {
            categories: vec!["spell".to_string()],
            ..Default::default()
        };
        let result = convert(&compendium(), &options);
        assert!(matches!(result, Err(CardError::Config { .. })));
    }

    #[test]
    fn test_to_json_shape() {
        let mut card = CardRecord::new("Club", vec!["ph".to_string()]);
        card.push_property("Type", "Melee weapon");

        let json = to_json(&[card], 4).unwrap();
        let expected = r#"[
    {
        "title": "Club",
        "tags": [
            "ph"
        ],
        "contents": [
            "property | Type | Melee weapon"
        ]
    }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_to_json_keeps_non_ascii_text() {
        let mut card = CardRecord::new("Äther Blade", vec![]);
        card.push_text("Forged in Ysgard — “radiant” steel.");

        let json = to_json(&[card.clone()], 2).unwrap();
        assert!(json.contains("Äther Blade"));
        assert!(json.contains("Forged in Ysgard — “radiant” steel."));

        let cards: Vec<CardRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(cards, vec![card]);
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], 2).unwrap(), "[]");
    }
}
