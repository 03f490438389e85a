//! Page text providers.
//!
//! The converter never touches a PDF itself. It reads page text and the
//! bookmark outline through [`PageTextProvider`], so any extractor that can
//! produce those two things can feed it.

mod corpus;

pub use corpus::CorpusFile;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalize::clean_page_text;

/// One bookmark of the document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Nesting level, 1 for top-level bookmarks.
    #[serde(default = "default_depth")]
    pub depth: u32,

    /// Bookmark title, e.g. "RESOLUTION 2 (Rev. Dubai, 2018) - World ...".
    pub label: String,

    /// 1-based page number the bookmark points to.
    pub page: usize,
}

fn default_depth() -> u32 {
    1
}

impl OutlineEntry {
    #[must_use]
    pub fn new(depth: u32, label: impl Into<String>, page: usize) -> Self {
        Self {
            depth,
            label: label.into(),
            page,
        }
    }
}

/// Source of page text and outline for a corpus.
pub trait PageTextProvider {
    /// Raw text of a page (0-based).
    fn page_text(&self, index: usize) -> Result<String>;

    /// Number of pages in the corpus.
    fn page_count(&self) -> usize;

    /// Outline entries in document order.
    fn outline(&self) -> &[OutlineEntry];

    /// Cleaned text of pages `start..end`, joined with newlines.
    ///
    /// `end` is exclusive and clamped to the page count, so an empty range
    /// yields an empty string. Each page has its running header removed
    /// before joining.
    fn extract_text_range(&self, start: usize, end: usize, scan_lines: usize) -> Result<String> {
        let end = end.min(self.page_count());
        let mut parts = Vec::new();
        for index in start..end {
            let raw = self.page_text(index)?;
            parts.push(clean_page_text(&raw, index, scan_lines));
        }
        Ok(parts.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_range_cleans_and_joins() {
        let corpus = CorpusFile::new(
            vec![
                "Res. 1\n3\nfirst".to_string(),
                "4\nRes. 1\nsecond".to_string(),
                "Res. 2\n5\nthird".to_string(),
            ],
            Vec::new(),
        );

        let text = corpus.extract_text_range(0, 2, 5).unwrap();
        assert_eq!(text, "first\nsecond");
    }

    #[test]
    fn test_extract_text_range_clamps_end() {
        let corpus = CorpusFile::new(vec!["a".to_string(), "b".to_string()], Vec::new());
        assert_eq!(corpus.extract_text_range(1, 10, 5).unwrap(), "b");
    }

    #[test]
    fn test_extract_text_range_empty_span() {
        let corpus = CorpusFile::new(vec!["a".to_string(), "b".to_string()], Vec::new());
        assert_eq!(corpus.extract_text_range(1, 1, 5).unwrap(), "");
    }

    #[test]
    fn test_extract_text_range_past_end_is_empty() {
        let corpus = CorpusFile::new(vec!["a".to_string()], Vec::new());
        assert_eq!(corpus.extract_text_range(3, 4, 5).unwrap(), "");
    }

    #[test]
    fn test_outline_entry_depth_defaults_to_one() {
        let entry: OutlineEntry =
            serde_json::from_str(r#"{"label": "PART I - Resolutions", "page": 3}"#).unwrap();
        assert_eq!(entry, OutlineEntry::new(1, "PART I - Resolutions", 3));
    }
}
