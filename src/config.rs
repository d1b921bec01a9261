//! Project manifest (cards.yaml) parsing.
//!
//! The manifest holds default conversion settings so repeated runs don't
//! need the same flags. Command-line options take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::pipeline::{ConvertOptions, SourcebookStyle, TagSource, DEFAULT_INDENT};

/// Manifest file looked up in the current directory.
pub const MANIFEST_FILE: &str = "cards.yaml";

/// Conversion defaults loaded from cards.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Categories to convert (default: all implemented).
    pub categories: Vec<String>,

    /// Fields to derive tags from.
    pub tags: Vec<TagSource>,

    /// Sourcebook tag style.
    pub sourcebook: Option<SourcebookStyle>,

    /// Output file; stdout when unset.
    pub output: Option<PathBuf>,

    /// JSON indentation width.
    pub indent: Option<usize>,
}

impl Manifest {
    /// Load manifest from a cards.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `cards.yaml` from a directory if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(MANIFEST_FILE);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| CardError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILE)),
        })
    }

    /// Build conversion options, letting non-empty overrides win.
    pub fn options(
        &self,
        categories: &[String],
        tags: &[TagSource],
        sourcebook: Option<SourcebookStyle>,
    ) -> ConvertOptions {
        ConvertOptions {
            categories: pick(categories, &self.categories),
            tags: pick(tags, &self.tags),
            sourcebook: sourcebook.or(self.sourcebook).unwrap_or_default(),
        }
    }

    /// Get the effective JSON indentation.
    pub fn effective_indent(&self) -> usize {
        self.indent.unwrap_or(DEFAULT_INDENT)
    }
}

fn pick<T: Clone>(preferred: &[T], fallback: &[T]) -> Vec<T> {
    if preferred.is_empty() {
        fallback.to_vec()
    } else {
        preferred.to_vec()
    }
}
