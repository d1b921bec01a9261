//! Core domain types for compendium conversion.
//!
//! This module contains the data that flows through the pipeline:
//! - `codes` - abbreviation tables (item type, property, damage type)
//! - `ItemRecord` - extracted fields of one compendium entry
//! - `CardRecord` - the finished card

mod card;
pub mod codes;
mod field;

pub use card::{CardRecord, LineKind};
pub use codes::CodeTable;
pub use field::{Field, FieldSlot, FieldValue, ItemRecord};
