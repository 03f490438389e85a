//! Corpus files holding pre-extracted page text.
//!
//! A corpus file is JSON or YAML with two keys:
//!
//! ```yaml
//! pages:
//!   - "Res. 2\n21\nThe Plenipotentiary Conference ..."
//! outline:
//!   - depth: 1
//!     label: "PART I - Resolutions"
//!     page: 1
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{OutlineEntry, PageTextProvider};
use crate::error::{ConverterError, Result};

/// In-memory corpus read from a JSON or YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusFile {
    /// Raw text per page, page 0 first.
    #[serde(default)]
    pages: Vec<String>,

    /// Bookmarks in document order.
    #[serde(default)]
    outline: Vec<OutlineEntry>,
}

impl CorpusFile {
    #[must_use]
    pub fn new(pages: Vec<String>, outline: Vec<OutlineEntry>) -> Self {
        Self { pages, outline }
    }

    /// Load a corpus, choosing the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let corpus = match extension.as_str() {
            "json" => Self::from_json(&content)?,
            "yaml" | "yml" => Self::from_yaml(&content)?,
            _ => return Err(ConverterError::UnsupportedCorpusFormat(extension)),
        };

        tracing::debug!(
            path = %path.display(),
            pages = corpus.pages.len(),
            outline = corpus.outline.len(),
            "Loaded corpus"
        );
        Ok(corpus)
    }

    /// Parse a JSON corpus.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a YAML corpus.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

impl PageTextProvider for CorpusFile {
    fn page_text(&self, index: usize) -> Result<String> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(ConverterError::PageOutOfRange {
                index,
                count: self.pages.len(),
            })
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn outline(&self) -> &[OutlineEntry] {
        &self.outline
    }
}
