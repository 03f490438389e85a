//! Removal of the running header printed at the top of every page.
//!
//! A page of the Final Acts starts with a short reference to the current
//! document ("Res. 2", "Dec. 5") and the page number, in either order:
//!
//! ```text
//! Res. 2          21
//! 21              Res. 2
//! <content>       <content>
//! ```

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Document reference such as "Res. 2", "Dec.5" or "Rec. 7".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static REFERENCE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(Res|Dec|Rec)\.\s*\d+").expect("valid regex"));

/// A line holding only a page number.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{1,3}\s*$").expect("valid regex"));

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Strip the running header from one page.
///
/// Only the first `scan_lines` lines are searched for the reference token.
/// The token line, any blank lines above it, and the single line directly
/// above or below it (when that line is a bare page number or blank) are
/// removed. A number separated from the token by a blank line is content and
/// is kept.
///
/// # Examples
/// ```
/// use akn4itu_converter::normalize::clean_page_text;
///
/// let page = "Res. 7\n12\nconsidering\n";
/// assert_eq!(clean_page_text(page, 3, 5), "considering\n");
/// ```
#[must_use]
pub fn clean_page_text(text: &str, page_index: usize, scan_lines: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(reference_idx) = lines
        .iter()
        .take(scan_lines)
        .position(|line| REFERENCE_TOKEN.is_match(line))
    else {
        return text.to_string();
    };

    let mut skip: BTreeSet<usize> = BTreeSet::new();
    skip.insert(reference_idx);

    for (idx, line) in lines.iter().enumerate().take(reference_idx) {
        if is_blank(line) {
            skip.insert(idx);
        }
    }

    let neighbours = [reference_idx.checked_sub(1), Some(reference_idx + 1)];
    for idx in neighbours.into_iter().flatten() {
        if let Some(line) = lines.get(idx) {
            if PAGE_NUMBER.is_match(line) || is_blank(line) {
                skip.insert(idx);
            }
        }
    }

    tracing::trace!(
        page = page_index,
        removed = skip.len(),
        "Removed running header lines"
    );

    lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| !skip.contains(idx))
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n")
}
