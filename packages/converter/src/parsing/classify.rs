//! Line classification.
//!
//! Every splitting step works line by line: it asks which lines carry a
//! marker for its level and cuts the text there.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::{lookup_header, Keyword};

/// A paragraph number alone on its line: "3", "12", "2.1". Years never match.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERIC_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2}(?:\.\d+)?)\s*$").expect("valid regex"));

/// A paragraph number followed by "that " or "to " on the same line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CONNECTIVE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2})\s+(?:that |to )").expect("valid regex"));

/// A dotted sub-number such as "1.1", with or without text after it.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOTTED_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+\.\d+)(?:\s+|$)").expect("valid regex"));

/// A lowercase letter marker such as "a)".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LETTERED_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([a-z]\))\s*").expect("valid regex"));

/// What a single line of document text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Header(&'static Keyword),
    NumericLabel,
    DottedLabel,
    ConnectiveLabel,
    LetteredLabel,
    Prose,
}

/// Classify a line. Earlier kinds win when several apply.
///
/// # Examples
/// ```
/// use akn4itu_converter::parsing::{classify, LineKind};
///
/// assert_eq!(classify("12"), LineKind::NumericLabel);
/// assert_eq!(classify("2018"), LineKind::Prose);
/// assert_eq!(classify("b) the need to"), LineKind::LetteredLabel);
/// ```
#[must_use]
pub fn classify(line: &str) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(keyword) = lookup_header(line) {
        return LineKind::Header(keyword);
    }
    for style in [
        MarkerStyle::Numeric,
        MarkerStyle::Dotted,
        MarkerStyle::Connective,
        MarkerStyle::Lettered,
    ] {
        if style.match_line(line).is_some() {
            return style.line_kind();
        }
    }
    LineKind::Prose
}

/// Marker convention used at one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Number alone on its line, text on the following lines.
    Numeric,
    /// Number followed by "that" or "to" on the same line.
    Connective,
    /// Dotted sub-number.
    Dotted,
    /// Lowercase letter and closing parenthesis.
    Lettered,
}

/// A marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Marker text, e.g. "7", "1.2" or "b)".
    pub label: &'a str,

    /// Byte offset within the line where the body starts.
    pub body_offset: usize,

    /// The marker is the only thing on its line.
    pub standalone: bool,
}

impl MarkerStyle {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Numeric => &NUMERIC_LABEL,
            Self::Connective => &CONNECTIVE_LABEL,
            Self::Dotted => &DOTTED_LABEL,
            Self::Lettered => &LETTERED_LABEL,
        }
    }

    /// Kind that [`classify`] gives a line carrying this marker.
    pub(crate) fn line_kind(self) -> LineKind {
        match self {
            Self::Numeric => LineKind::NumericLabel,
            Self::Connective => LineKind::ConnectiveLabel,
            Self::Dotted => LineKind::DottedLabel,
            Self::Lettered => LineKind::LetteredLabel,
        }
    }

    /// Match this style's marker at the start of `line`.
    #[must_use]
    pub fn match_line(self, line: &str) -> Option<Marker<'_>> {
        let caps = self.pattern().captures(line)?;
        let label = caps.get(1)?;
        let whole = caps.get(0)?;

        // The connective itself belongs to the body.
        let body_offset = match self {
            Self::Connective => {
                let rest = &line[label.end()..];
                label.end() + (rest.len() - rest.trim_start().len())
            }
            _ => whole.end(),
        };

        Some(Marker {
            label: label.as_str(),
            body_offset,
            standalone: line[body_offset..].trim().is_empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionKind;

    #[test]
    fn test_classify_kinds() {
        assert_eq!(classify("   "), LineKind::Blank);
        assert!(matches!(
            classify("resolves"),
            LineKind::Header(k) if k.kind == SectionKind::Operative
        ));
        assert_eq!(classify(" 3 "), LineKind::NumericLabel);
        assert_eq!(classify("1.1"), LineKind::NumericLabel);
        assert_eq!(classify("1.1 to prepare"), LineKind::DottedLabel);
        assert_eq!(classify("10 that the Council"), LineKind::ConnectiveLabel);
        assert_eq!(classify("a) that"), LineKind::LetteredLabel);
        assert_eq!(classify("the Union"), LineKind::Prose);
    }

    #[test]
    fn test_years_are_not_labels() {
        assert_eq!(classify("2018"), LineKind::Prose);
        assert!(MarkerStyle::Numeric.match_line("123").is_none());
    }

    #[test]
    fn test_connective_body_starts_at_connective() {
        let line = "7  that it is necessary";
        let marker = MarkerStyle::Connective.match_line(line).unwrap();
        assert_eq!(marker.label, "7");
        assert_eq!(&line[marker.body_offset..], "that it is necessary");
        assert!(!marker.standalone);
    }

    #[test]
    fn test_connective_requires_connective() {
        assert!(MarkerStyle::Connective.match_line("7 the Council").is_none());
        assert!(MarkerStyle::Connective.match_line("7 thatch").is_none());
    }

    #[test]
    fn test_dotted_marker() {
        let line = "1.2 bar";
        let marker = MarkerStyle::Dotted.match_line(line).unwrap();
        assert_eq!(marker.label, "1.2");
        assert_eq!(&line[marker.body_offset..], "bar");

        let alone = MarkerStyle::Dotted.match_line("1.2").unwrap();
        assert!(alone.standalone);
        assert!(MarkerStyle::Dotted.match_line("1.2b").is_none());
    }

    #[test]
    fn test_lettered_marker() {
        let line = "  b)the need";
        let marker = MarkerStyle::Lettered.match_line(line).unwrap();
        assert_eq!(marker.label, "b)");
        assert_eq!(&line[marker.body_offset..], "the need");
        assert!(MarkerStyle::Lettered.match_line("B) upper").is_none());
    }

    #[test]
    fn test_numeric_marker_is_standalone() {
        let marker = MarkerStyle::Numeric.match_line("4").unwrap();
        assert_eq!(marker.label, "4");
        assert!(marker.standalone);
    }
}
