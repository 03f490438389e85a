//! Document boundaries recovered from the outline.
//!
//! The outline of the Final Acts lists part headers ("PART I - Resolutions")
//! followed by one bookmark per document. Each document runs from its own
//! bookmark page up to, but not including, the next document's bookmark page.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DEFAULT_PART;
use crate::source::OutlineEntry;
use crate::types::DocumentCategory;

/// "PART IV - Recommendations", any dash variant.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PART_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PART\s+([IVXLC]+)\s*[-\u{2013}\u{2014}]\s*(.*)").expect("valid regex")
});

/// "RESOLUTION 2 (Rev. Dubai, 2018) - Title".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(RESOLUTION|DECISION|RECOMMENDATION)\s+(\d+)\s*\(([^)]+)\)\s*(?:-\s*)?(.*)")
        .expect("valid regex")
});

/// Where one document lives in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryEntry {
    pub category: DocumentCategory,
    pub number: String,
    pub revision: String,
    pub title: String,

    /// First page, 0-based.
    pub start_page: usize,

    /// One past the last page, 0-based. Equal to `start_page` when the next
    /// document starts on the same page, leaving this document no text.
    pub end_page: usize,

    /// Part the document belongs to.
    pub part: String,
}

/// Parse a part header label, returning the part name.
///
/// # Examples
/// ```
/// use akn4itu_converter::outline::parse_part_header;
///
/// assert_eq!(parse_part_header("PART II \u{2013} Decisions"), Some("Decisions".to_string()));
/// assert_eq!(parse_part_header("RESOLUTION 2 (Rev. Dubai, 2018)"), None);
/// ```
#[must_use]
pub fn parse_part_header(label: &str) -> Option<String> {
    PART_HEADER
        .captures(label.trim())
        .map(|caps| caps[2].trim().to_string())
}

/// Compute document spans from the outline.
///
/// Labels that are neither a part header nor a document header are ignored.
/// A document ends where the next document starts (exclusive, never before
/// its own start) and the last document runs to the end of the corpus. Two
/// documents starting on the same page never share text: the earlier one gets
/// an empty span.
#[must_use]
pub fn locate_boundaries(outline: &[OutlineEntry], page_count: usize) -> Vec<BoundaryEntry> {
    let mut current_part = DEFAULT_PART.to_string();
    let mut entries: Vec<BoundaryEntry> = Vec::new();

    for entry in outline {
        let label = entry.label.trim();

        if let Some(part) = parse_part_header(label) {
            tracing::debug!(part = %part, "Entering part");
            current_part = part;
            continue;
        }

        let Some(caps) = DOCUMENT_HEADER.captures(label) else {
            tracing::debug!(label = %label, depth = entry.depth, "Unrecognized outline entry");
            continue;
        };

        let Some(category) = DocumentCategory::from_heading(&caps[1]) else {
            continue;
        };

        entries.push(BoundaryEntry {
            category,
            number: caps[2].to_string(),
            revision: caps[3].trim().to_string(),
            title: caps[4].trim().to_string(),
            start_page: entry.page.saturating_sub(1),
            end_page: 0,
            part: current_part.clone(),
        });
    }

    let next_starts: Vec<Option<usize>> = entries
        .iter()
        .skip(1)
        .map(|e| Some(e.start_page))
        .chain(std::iter::once(None))
        .collect();

    for (entry, next_start) in entries.iter_mut().zip(next_starts) {
        let end = next_start.unwrap_or(page_count);
        entry.end_page = end.max(entry.start_page);
        if entry.end_page == entry.start_page {
            tracing::debug!(
                category = entry.category.as_str(),
                number = %entry.number,
                page = entry.start_page,
                "Document shares its start page with the next one, span is empty"
            );
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outline() -> Vec<OutlineEntry> {
        vec![
            OutlineEntry::new(1, "Table of contents", 1),
            OutlineEntry::new(1, "PART I \u{2013} Resolutions", 3),
            OutlineEntry::new(
                2,
                "RESOLUTION 2 (Rev. Dubai, 2018) - World telecommunication policy forum",
                3,
            ),
            OutlineEntry::new(2, "RESOLUTION 5 (Rev. Dubai, 2018)", 6),
            OutlineEntry::new(1, "PART II - Decisions", 9),
            OutlineEntry::new(2, "DECISION 5 (Rev. Dubai, 2018) - Revenue and expenses", 9),
            OutlineEntry::new(2, "DECISION 11 (Dubai, 2018) Creation of groups", 9),
        ]
    }

    #[test]
    fn test_locate_boundaries_spans_and_parts() {
        let entries = locate_boundaries(&outline(), 12);
        assert_eq!(entries.len(), 4);

        assert_eq!(entries[0].category, DocumentCategory::Resolution);
        assert_eq!(entries[0].number, "2");
        assert_eq!(entries[0].revision, "Rev. Dubai, 2018");
        assert_eq!(entries[0].title, "World telecommunication policy forum");
        assert_eq!(entries[0].part, "Resolutions");
        assert_eq!((entries[0].start_page, entries[0].end_page), (2, 5));

        assert_eq!(entries[1].title, "");
        assert_eq!((entries[1].start_page, entries[1].end_page), (5, 8));

        assert_eq!(entries[2].part, "Decisions");
        assert_eq!((entries[2].start_page, entries[2].end_page), (8, 8));

        assert_eq!(entries[3].revision, "Dubai, 2018");
        assert_eq!(entries[3].title, "Creation of groups");
        assert_eq!((entries[3].start_page, entries[3].end_page), (8, 12));
    }

    #[test]
    fn test_documents_on_the_same_page_do_not_overlap() {
        let outline = vec![
            OutlineEntry::new(1, "PART II - Decisions", 1),
            OutlineEntry::new(2, "DECISION 5 (Rev. Dubai, 2018) - Revenue and expenses", 1),
            OutlineEntry::new(2, "DECISION 11 (Dubai, 2018) - Creation of groups", 1),
        ];
        let spans: Vec<_> = locate_boundaries(&outline, 1)
            .iter()
            .map(|e| (e.number.clone(), e.start_page, e.end_page))
            .collect();
        assert_eq!(
            spans,
            vec![("5".to_string(), 0, 0), ("11".to_string(), 0, 1)]
        );
    }

    #[test]
    fn test_documents_before_any_part_use_default() {
        let outline = vec![OutlineEntry::new(1, "RECOMMENDATION 7 (Dubai, 2018)", 1)];
        let entries = locate_boundaries(&outline, 2);
        assert_eq!(entries[0].part, "other");
        assert_eq!(entries[0].category, DocumentCategory::Recommendation);
    }

    #[test]
    fn test_unrecognized_labels_are_ignored() {
        let outline = vec![
            OutlineEntry::new(1, "Resolution 2 (lower case)", 1),
            OutlineEntry::new(1, "ANNEX", 2),
        ];
        assert!(locate_boundaries(&outline, 3).is_empty());
    }

    #[test]
    fn test_parse_part_header_hyphen() {
        assert_eq!(
            parse_part_header("  PART III - Recommendations  "),
            Some("Recommendations".to_string())
        );
    }
}
