//! Generic parsed markup tree.

use std::collections::HashMap;

/// A named node with optional text, attributes and child elements.
///
/// `text` holds only the text that appears before the first child element,
/// which is what compendium fields use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawNode {
    pub tag: String,
    pub text: Option<String>,
    pub attributes: HashMap<String, String>,
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Create an empty node.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Create a node with text content.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(tag).with_text(text)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Iterate over this node and all of its descendants, depth-first in
    /// document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Iterate over this node and its descendants with the given tag.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a RawNode> + 'a {
        self.descendants().filter(move |n| n.tag == tag)
    }
}

/// Pre-order iterator over a node subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a RawNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a RawNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
