//! Markup front end for compendium documents.
//!
//! Compendium files are XML: a `<compendium version="5">` root holding
//! `<item>`, `<spell>`, `<monster>`, ... entries whose child elements are the
//! entry's fields. The parser turns the XML into a plain `RawNode` tree; all
//! field interpretation happens in the pipeline.
//!
//! # Usage
//!
//! ```ignore
//! use compendium_cards::parser::parse_compendium;
//!
//! let source = std::fs::read_to_string("Items.xml")?;
//! let compendium = parse_compendium(&source)?;
//!
//! for item in compendium.entries("item") {
//!     println!("Found: {:?}", item.find_all("name").next());
//! }
//! ```

pub mod compendium;
pub mod node;

pub use compendium::{check_version, parse_compendium, Compendium, SUPPORTED_VERSIONS};
pub use node::RawNode;
