//! Compendium XML loading.
//!
//! Parses the XML text with `roxmltree`, checks the root element and its
//! declared `version`, and converts the document into an owned `RawNode`
//! tree for the pipeline.

use crate::error::{CardError, Result};

use super::node::RawNode;

/// Root element name of a compendium document.
pub const ROOT_ELEMENT: &str = "compendium";

/// Compendium versions this converter understands.
pub const SUPPORTED_VERSIONS: &[&str] = &["5"];

/// A parsed compendium document.
#[derive(Debug, Clone)]
pub struct Compendium {
    /// Declared `version` attribute of the root element, if any.
    pub version: Option<String>,
    pub root: RawNode,
}

impl Compendium {
    /// Wrap an already-built tree, checking its version.
    pub fn from_root(root: RawNode) -> Result<Self> {
        let version = root.attr("version").map(|v| v.to_string());
        check_version(version.as_deref())?;
        Ok(Self { version, root })
    }

    /// All entries of a category (`item`, `spell`, ...) in document order.
    pub fn entries<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a RawNode> + 'a {
        self.root.find_all(category)
    }
}

/// Parse compendium XML source.
pub fn parse_compendium(source: &str) -> Result<Compendium> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc =
        roxmltree::Document::parse_with_options(source, options).map_err(|e| CardError::Xml {
            message: e.to_string(),
            help: Some("Check that the file is well-formed XML".to_string()),
        })?;

    let root = doc.root_element();
    if root.tag_name().name() != ROOT_ELEMENT {
        return Err(CardError::Xml {
            message: format!(
                "Expected <{}> root element, found <{}>",
                ROOT_ELEMENT,
                root.tag_name().name()
            ),
            help: Some("Compendium files start with <compendium version=\"5\">".to_string()),
        });
    }

    Compendium::from_root(convert_node(root))
}

/// Reject documents declaring a version outside `SUPPORTED_VERSIONS`.
///
/// Documents without a `version` attribute are accepted.
pub fn check_version(version: Option<&str>) -> Result<()> {
    match version {
        None => Ok(()),
        Some(v) if SUPPORTED_VERSIONS.contains(&v.trim()) => Ok(()),
        Some(v) => Err(CardError::Version {
            found: v.to_string(),
            supported: SUPPORTED_VERSIONS.join(", "),
        }),
    }
}

fn convert_node(node: roxmltree::Node<'_, '_>) -> RawNode {
    RawNode {
        tag: node.tag_name().name().to_string(),
        text: node.text().map(|t| t.to_string()),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect(),
        children: node
            .children()
            .filter(|n| n.is_element())
            .map(convert_node)
            .collect(),
    }
}
