//! Splitting a block of text at marker lines.
//!
//! Recitals, operative paragraphs and sub-items are all a lead fragment
//! followed by (label, body) pairs. The levels differ only in which marker
//! style cuts the text.

use std::collections::HashSet;

use super::classify::{classify, MarkerStyle};
use super::lines::lines_with_offsets;
use crate::normalize::clean_whitespace;
use crate::types::{NumberedParagraph, Recital, SubItem};

/// A labeled fragment; `body` is the raw text up to the next marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledPart<'a> {
    pub label: &'a str,
    pub body: &'a str,
}

/// Result of cutting a block at marker lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSplit<'a> {
    /// Text before the first marker.
    pub lead: &'a str,
    pub parts: Vec<LabeledPart<'a>>,
}

/// Cut `text` at every line carrying a `style` marker.
///
/// A line is a cut only when [`classify`] puts it in this style's kind, so a
/// standalone "1.2" stays a paragraph number and never cuts sub-items.
/// The first line of `text` counts as a line start. A marker that is alone on
/// the last line has no body and is not a cut. A label seen earlier in the
/// same block does not start a new part, so its line stays in the preceding
/// body. Returns `None` when no line is cut.
#[must_use]
pub fn split_labeled(text: &str, style: MarkerStyle) -> Option<LabeledSplit<'_>> {
    let lines: Vec<(usize, &str)> = lines_with_offsets(text).collect();
    let line_count = lines.len();

    let mut seen: HashSet<&str> = HashSet::new();
    // (line start, label, body start)
    let mut cuts: Vec<(usize, &str, usize)> = Vec::new();

    for (idx, (offset, line)) in lines.into_iter().enumerate() {
        if classify(line) != style.line_kind() {
            continue;
        }
        let Some(marker) = style.match_line(line) else {
            continue;
        };
        if marker.standalone && idx + 1 == line_count {
            continue;
        }
        if !seen.insert(marker.label) {
            tracing::trace!(label = marker.label, "Folded repeated marker into previous item");
            continue;
        }
        cuts.push((offset, marker.label, offset + marker.body_offset));
    }

    let first = cuts.first()?;
    let lead = &text[..first.0];

    let parts = cuts
        .iter()
        .enumerate()
        .map(|(idx, &(_, label, body_start))| {
            let end = cuts.get(idx + 1).map_or(text.len(), |next| next.0);
            LabeledPart {
                label,
                body: &text[body_start.min(end)..end],
            }
        })
        .collect();

    Some(LabeledSplit { lead, parts })
}

/// Split a preamble section body into recitals.
///
/// Lettered markers cut the body. Without markers the whole body is one
/// unlabeled recital.
#[must_use]
pub fn parse_recitals(body: &str) -> Vec<Recital> {
    let Some(split) = split_labeled(body, MarkerStyle::Lettered) else {
        return vec![Recital::new("", clean_whitespace(body))];
    };

    let mut recitals = Vec::with_capacity(split.parts.len() + 1);
    let lead = clean_whitespace(split.lead);
    if !lead.is_empty() {
        recitals.push(Recital::new("", lead));
    }
    recitals.extend(
        split
            .parts
            .iter()
            .map(|part| Recital::new(part.label, clean_whitespace(part.body))),
    );
    recitals
}

/// Split an operative section body into numbered paragraphs.
///
/// Numbers alone on their line are tried first, then numbers followed by
/// "that"/"to". Without either the whole body is one unnumbered paragraph.
#[must_use]
pub fn parse_paragraphs(body: &str) -> Vec<NumberedParagraph> {
    let split = split_labeled(body, MarkerStyle::Numeric)
        .or_else(|| split_labeled(body, MarkerStyle::Connective));

    let Some(split) = split else {
        return vec![NumberedParagraph::new("", clean_whitespace(body))];
    };

    let mut paragraphs = Vec::with_capacity(split.parts.len() + 1);
    let lead = clean_whitespace(split.lead);
    if !lead.is_empty() {
        paragraphs.push(NumberedParagraph::new("", lead));
    }
    paragraphs.extend(
        split
            .parts
            .iter()
            .map(|part| parse_paragraph(part.label, part.body)),
    );
    paragraphs
}

/// Build one numbered paragraph, detecting its sub-items.
///
/// Dotted sub-numbers are tried first, lettered markers second. Only one
/// style is used per paragraph.
fn parse_paragraph(num: &str, body: &str) -> NumberedParagraph {
    let split = split_labeled(body, MarkerStyle::Dotted)
        .or_else(|| split_labeled(body, MarkerStyle::Lettered));

    match split {
        Some(split) => {
            let sub_items = split
                .parts
                .iter()
                .map(|part| SubItem::new(part.label, clean_whitespace(part.body)))
                .collect();
            NumberedParagraph::new(num, clean_whitespace(split.lead)).with_sub_items(sub_items)
        }
        None => NumberedParagraph::new(num, clean_whitespace(body)),
    }
}
