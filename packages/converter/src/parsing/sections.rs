//! Segmentation of a document body into keyword-opened sections.

use std::collections::HashMap;

use super::classify::{classify, LineKind};
use super::keywords::Keyword;
use super::lines::lines_with_offsets;
use crate::types::SectionKind;

/// A trigger keyword found on a line of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHit {
    /// Byte offset of the whitespace run preceding the keyword line: the
    /// newline that ends the previous content line, or 0.
    pub position: usize,

    pub keyword: &'static Keyword,
}

/// Text belonging to one section, keyword line removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSection<'a> {
    pub keyword: &'static str,
    pub kind: SectionKind,
    pub body: &'a str,
}

/// Start of the maximal whitespace run that ends at `end`.
fn whitespace_run_start(text: &str, end: usize) -> usize {
    text[..end]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map_or(end, |(idx, _)| idx)
}

/// End of the whitespace run that starts at `start`, cut after its last newline.
fn trailing_newline_end(text: &str, start: usize) -> usize {
    text[start..]
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .filter(|(_, c)| *c == '\n')
        .last()
        .map_or(start, |(idx, _)| start + idx + 1)
}

/// Find all keyword lines, in document order, before overlap filtering.
///
/// A keyword line must be followed by a newline. Two occurrences of the same
/// keyword never share a whitespace run.
fn raw_hits(text: &str) -> Vec<SectionHit> {
    let mut hits = Vec::new();
    let mut last_end: HashMap<&'static str, usize> = HashMap::new();

    let lines: Vec<(usize, &str)> = lines_with_offsets(text).collect();
    let line_count = lines.len();

    for (idx, (offset, line)) in lines.into_iter().enumerate() {
        if idx + 1 == line_count {
            break;
        }
        let LineKind::Header(keyword) = classify(line) else {
            continue;
        };

        let keyword_start = offset + (line.len() - line.trim_start().len());
        let keyword_end = keyword_start + keyword.phrase.len();
        let floor = last_end.get(keyword.phrase).copied().unwrap_or(0);
        let run_start = whitespace_run_start(text, keyword_start).max(floor);

        let position = if run_start == 0 {
            Some(0)
        } else {
            text[run_start..keyword_start]
                .find('\n')
                .map(|nl| run_start + nl)
        };

        let Some(position) = position else {
            continue;
        };

        last_end.insert(keyword.phrase, trailing_newline_end(text, keyword_end));
        hits.push(SectionHit { position, keyword });
    }

    hits
}

/// Find the keyword lines that open sections.
///
/// Hits are sorted by position. A hit that starts within the previous kept
/// keyword's length plus `overlap_window` characters of that hit is
/// discarded.
#[must_use]
pub fn find_section_hits(text: &str, overlap_window: usize) -> Vec<SectionHit> {
    let mut hits = raw_hits(text);
    hits.sort_by_key(|hit| hit.position);

    let mut kept: Vec<SectionHit> = Vec::with_capacity(hits.len());
    for hit in hits {
        match kept.last() {
            Some(prev) => {
                let distance = text[prev.position..hit.position].chars().count();
                if distance > prev.keyword.phrase.chars().count() + overlap_window {
                    kept.push(hit);
                } else {
                    tracing::trace!(
                        keyword = hit.keyword.phrase,
                        previous = prev.keyword.phrase,
                        "Dropped overlapping section header"
                    );
                }
            }
            None => kept.push(hit),
        }
    }
    kept
}

/// Strip a leading keyword, ignoring ASCII case.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> &'a str {
    match text.get(..keyword.len()) {
        Some(head) if head.eq_ignore_ascii_case(keyword) => text[keyword.len()..].trim(),
        _ => text,
    }
}

/// Partition `text` into sections at the surviving keyword hits.
///
/// Text before the first hit belongs to no section.
#[must_use]
pub fn split_sections(text: &str, overlap_window: usize) -> Vec<RawSection<'_>> {
    let hits = find_section_hits(text, overlap_window);

    hits.iter()
        .enumerate()
        .map(|(idx, hit)| {
            let end = hits.get(idx + 1).map_or(text.len(), |next| next.position);
            let body = strip_keyword(text[hit.position..end].trim(), hit.keyword.phrase);
            RawSection {
                keyword: hit.keyword.phrase,
                kind: hit.keyword.kind,
                body,
            }
        })
        .collect()
}
