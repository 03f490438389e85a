//! Annex detection inside a document span.

use std::sync::LazyLock;

use regex::Regex;

use super::lines::lines_with_offsets;
use crate::normalize::clean_whitespace;

/// "ANNEX", "ANNEX 2", "ANNEX A", "ANNEX TO RESOLUTION 2 (REV. DUBAI, 2018)".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ANNEX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^ANNEX(?:\s+[A-Z0-9]+)?(?:\s+TO\s+(?:RESOLUTION|DECISION|RECOMMENDATION)\b[^a-z]*)?$",
    )
    .expect("valid regex")
});

/// Whether a line is an annex heading. Headings are upper case and alone on
/// their line.
#[must_use]
pub fn is_annex_heading(line: &str) -> bool {
    ANNEX_HEADING.is_match(line.trim())
}

/// Split a normalized document span into its body and annex blocks.
///
/// The first annex heading ends the body. Each block runs from its heading
/// to the next heading. Blank-line separated paragraphs inside a block are
/// whitespace-collapsed and rejoined with a blank line.
#[must_use]
pub fn split_annexes(text: &str) -> (&str, Vec<String>) {
    let starts: Vec<usize> = lines_with_offsets(text)
        .filter(|(_, line)| is_annex_heading(line))
        .map(|(offset, _)| offset)
        .collect();

    let Some(&first) = starts.first() else {
        return (text, Vec::new());
    };

    let annexes = starts
        .iter()
        .enumerate()
        .map(|(idx, &start)| {
            let end = starts.get(idx + 1).copied().unwrap_or(text.len());
            annex_block(&text[start..end])
        })
        .filter(|block| !block.is_empty())
        .collect();

    (text[..first].trim_end(), annexes)
}

fn annex_block(text: &str) -> String {
    text.split("\n\n")
        .map(clean_whitespace)
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_annex_headings() {
        assert!(is_annex_heading("ANNEX"));
        assert!(is_annex_heading("  ANNEX 2 "));
        assert!(is_annex_heading("ANNEX A"));
        assert!(is_annex_heading("ANNEX TO RESOLUTION 2 (REV. DUBAI, 2018)"));
        assert!(!is_annex_heading("Annex 1"));
        assert!(!is_annex_heading("ANNEX TO RESOLUTION 2 (Rev. Dubai, 2018)"));
        assert!(!is_annex_heading("see ANNEX 1 for details"));
    }

    #[test]
    fn test_split_annexes() {
        let text = "resolves\n1\nthat x\nANNEX 1\nList of\nitems\n\nSecond para\nANNEX 2\nMore";
        let (body, annexes) = split_annexes(text);
        assert_eq!(body, "resolves\n1\nthat x");
        assert_eq!(
            annexes,
            vec![
                "ANNEX 1 List of items\n\nSecond para".to_string(),
                "ANNEX 2 More".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_annex() {
        let (body, annexes) = split_annexes("resolves\n1\nthat x");
        assert_eq!(body, "resolves\n1\nthat x");
        assert!(annexes.is_empty());
    }
}
