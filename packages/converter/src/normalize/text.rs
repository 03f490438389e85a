//! Character and whitespace normalization for extracted text.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of spaces and tabs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

/// Three or more consecutive newlines.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Any whitespace run, newlines included.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ANY_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Characters that XML 1.0 does not allow (C0 controls except tab, LF, CR)
/// plus DEL and the C1 range.
fn is_disallowed_control(c: char) -> bool {
    matches!(
        c,
        '\u{00}'..='\u{08}' | '\u{0b}' | '\u{0c}' | '\u{0e}'..='\u{1f}' | '\u{7f}'..='\u{9f}'
    )
}

/// Remove characters that are not valid in XML 1.0 text.
///
/// # Examples
/// ```
/// use akn4itu_converter::normalize::strip_control_chars;
///
/// assert_eq!(strip_control_chars("a\u{0}b\u{7f}c\td"), "abc\td");
/// ```
#[must_use]
pub fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !is_disallowed_control(*c)).collect()
}

/// Fold typographic dashes and quotes to their ASCII forms.
///
/// # Examples
/// ```
/// use akn4itu_converter::normalize::fold_typography;
///
/// assert_eq!(fold_typography("PART I \u{2013} \u{201c}x\u{201d}"), "PART I - \"x\"");
/// ```
#[must_use]
pub fn fold_typography(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
            '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{201f}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{201a}' | '\u{201b}' => '\'',
            other => other,
        })
        .collect()
}

/// Normalize a document span before segmentation.
///
/// Folds dashes and quotes, strips control characters, collapses horizontal
/// whitespace to one space and 3+ newlines to two, then trims. Line structure
/// is preserved because the parser relies on it.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = fold_typography(&text);
    let text = strip_control_chars(&text);
    let text = HORIZONTAL_WHITESPACE.replace_all(&text, " ");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Collapse every whitespace run (newlines included) to one space and trim.
///
/// Applied to each fragment that ends up as element text.
#[must_use]
pub fn clean_whitespace(text: &str) -> String {
    ANY_WHITESPACE.replace_all(text, " ").trim().to_string()
}
