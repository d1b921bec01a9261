//! Code tables for compendium abbreviations.
//!
//! Compendium entries use short codes for item types, weapon properties and
//! damage types. Each table maps a code to the label shown on a card:
//! - `ITEM_TYPES` - `HA` -> "Heavy Armor", `$` -> "Money", ...
//! - `ITEM_PROPERTIES` - `V` -> "Versatile", `2H` -> "Two-handed", ...
//! - `DAMAGE_TYPES` - `S` -> "Slashing", ...
//!
//! Lookups never fail: an unknown code comes back as its own label.

/// A read-only mapping from short codes to display labels.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Short name of the table (e.g. "type").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the label for a code, if the table knows it.
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Resolve a code to its label, falling back to the code itself.
    pub fn lookup<'a>(&self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }

    /// Iterate over `(code, label)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Item type codes.
pub static ITEM_TYPES: CodeTable = CodeTable::new(
    "type",
    &[
        ("HA", "Heavy Armor"),
        ("MA", "Medium Armor"),
        ("LA", "Light Armor"),
        ("S", "Shield"),
        ("M", "Melee weapon"),
        ("R", "Ranged weapon"),
        ("A", "Ammunition"),
        ("RD", "Rod"),
        ("ST", "Staff"),
        ("WD", "Wand"),
        ("RG", "Ring"),
        ("P", "Potion"),
        ("SC", "Scroll"),
        ("W", "Wondrous item"),
        ("G", "Adventuring gear"),
        ("$", "Money"),
    ],
);

/// Weapon property codes.
pub static ITEM_PROPERTIES: CodeTable = CodeTable::new(
    "property",
    &[
        ("V", "Versatile"),
        ("L", "Light"),
        ("T", "Thrown"),
        ("A", "Ammunition"),
        ("F", "Finesse"),
        ("H", "Heavy"),
        ("LD", "Loading"),
        ("R", "Reach"),
        ("S", "Special"),
        ("2H", "Two-handed"),
    ],
);

/// Damage type codes.
pub static DAMAGE_TYPES: CodeTable = CodeTable::new(
    "damage",
    &[("S", "Slashing"), ("B", "Bludgeoning"), ("P", "Piercing")],
);

/// All code tables, in display order.
pub fn all_tables() -> [&'static CodeTable; 3] {
    [&ITEM_TYPES, &ITEM_PROPERTIES, &DAMAGE_TYPES]
}

/// Find a code table by its short name.
pub fn table_by_name(name: &str) -> Option<&'static CodeTable> {
    all_tables().into_iter().find(|t| t.name() == name)
}
