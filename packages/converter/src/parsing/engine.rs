//! Structural parser that turns one document span into a document tree.

use regex::Regex;

use super::annex::split_annexes;
use super::labeled::{parse_paragraphs, parse_recitals};
use super::sections::split_sections;
use crate::config::{Conference, ParserConfig};
use crate::error::{ConverterError, Result};
use crate::normalize::{clean_whitespace, normalize_text};
use crate::outline::BoundaryEntry;
use crate::types::{DocumentItem, OperativeSection, PreambleSection, SectionKind};

/// Parser for the text of a single resolution, decision or recommendation.
///
/// Parsing never fails: every step that finds no structure falls back to
/// keeping the text as one unlabeled unit.
#[derive(Debug, Clone)]
pub struct StructuralParser {
    formula: Regex,
    config: ParserConfig,
}

impl StructuralParser {
    /// Create a parser for the given conference.
    ///
    /// The enacting formula runs from "The <conference name>" to the first
    /// "<location>, <year>)" after it, with an optional trailing comma.
    pub fn new(conference: &Conference, config: ParserConfig) -> Result<Self> {
        let pattern = format!(
            r"(?s){}.*?{},\s*{}\),?",
            regex::escape(&conference.formula_opening()),
            regex::escape(&conference.location),
            regex::escape(&conference.year),
        );
        let formula = Regex::new(&pattern)
            .map_err(|e| ConverterError::InvalidConfig(format!("enacting formula: {e}")))?;
        Ok(Self { formula, config })
    }

    /// Parse the raw text of a document span.
    #[must_use]
    pub fn parse(&self, raw_text: &str, entry: &BoundaryEntry) -> DocumentItem {
        let mut document = DocumentItem::new(
            entry.category,
            entry.number.as_str(),
            entry.revision.as_str(),
            entry.title.as_str(),
        );

        let text = normalize_text(raw_text);
        let (body, annexes) = split_annexes(&text);
        document.annexes = annexes;

        let remainder = match self.formula.find(body) {
            Some(found) => {
                document.enacting_formula = clean_whitespace(found.as_str());
                &body[found.end()..]
            }
            None => body,
        };

        let sections = split_sections(remainder, self.config.overlap_window);
        for section in &sections {
            match section.kind {
                SectionKind::Preamble => document.preamble_sections.push(PreambleSection {
                    keyword: section.keyword.to_string(),
                    recitals: parse_recitals(section.body),
                }),
                SectionKind::Operative => document.operative_sections.push(OperativeSection {
                    keyword: section.keyword.to_string(),
                    paragraphs: parse_paragraphs(section.body),
                }),
            }
        }

        let leftover = remainder.trim();
        if sections.is_empty() && !leftover.is_empty() {
            tracing::warn!(
                document = %document.short_id(),
                "No section keywords found, keeping body as one unlabeled section"
            );
            document.operative_sections.push(OperativeSection {
                keyword: String::new(),
                paragraphs: parse_paragraphs(leftover),
            });
        }

        tracing::debug!(
            document = %document.short_id(),
            preamble = document.preamble_sections.len(),
            operative = document.operative_sections.len(),
            annexes = document.annexes.len(),
            "Parsed document"
        );

        document
    }
}

/// Parse one document span with a freshly built parser.
///
/// Convenient for single documents; [`StructuralParser`] compiles the
/// formula pattern once and should be reused across a corpus.
pub fn parse_document(
    raw_text: &str,
    entry: &BoundaryEntry,
    conference: &Conference,
    config: ParserConfig,
) -> Result<DocumentItem> {
    Ok(StructuralParser::new(conference, config)?.parse(raw_text, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentCategory, NumberedParagraph, SubItem};
    use pretty_assertions::assert_eq;

    fn entry() -> BoundaryEntry {
        BoundaryEntry {
            category: DocumentCategory::Resolution,
            number: "2".to_string(),
            revision: "Rev. Dubai, 2018".to_string(),
            title: "World telecommunication policy forum".to_string(),
            start_page: 0,
            end_page: 0,
            part: "Resolutions".to_string(),
        }
    }

    fn parser() -> StructuralParser {
        StructuralParser::new(&Conference::default(), ParserConfig::default()).unwrap()
    }

    const RESOLUTION: &str = "RESOLUTION 2 (REV. DUBAI, 2018)\n\
World telecommunication policy forum\n\
The Plenipotentiary Conference of the International Telecommunication Union (Dubai, 2018),\n\
considering\n\
a) the need for\n   a forum;\n\
b) the role of the Union,\n\
noting\n\
that the forum met in 2013,\n\
resolves\n\
1\n\
to convene a forum, as follows:\n\
1.1 first\n\
1.2 second\n\
2\n\
that the forum shall not produce\n\u{2013} binding outcomes\n\
instructs the Secretary-General\n\
to report.\n";

    #[test]
    fn test_parse_full_document() {
        let document = parser().parse(RESOLUTION, &entry());

        assert_eq!(
            document.enacting_formula,
            "The Plenipotentiary Conference of the International Telecommunication Union (Dubai, 2018),"
        );

        assert_eq!(document.preamble_sections.len(), 2);
        assert_eq!(document.preamble_sections[0].keyword, "considering");
        assert_eq!(
            document.preamble_sections[0].recitals,
            vec![
                SubItem::new("a)", "the need for a forum;"),
                SubItem::new("b)", "the role of the Union,"),
            ]
        );
        assert_eq!(
            document.preamble_sections[1].recitals,
            vec![SubItem::new("", "that the forum met in 2013,")]
        );

        assert_eq!(document.operative_sections.len(), 2);
        let resolves = &document.operative_sections[0];
        assert_eq!(resolves.keyword, "resolves");
        assert_eq!(
            resolves.paragraphs,
            vec![
                NumberedParagraph::new("1", "to convene a forum, as follows:").with_sub_items(vec![
                    SubItem::new("1.1", "first"),
                    SubItem::new("1.2", "second"),
                ]),
                NumberedParagraph::new("2", "that the forum shall not produce - binding outcomes"),
            ]
        );
        assert_eq!(
            document.operative_sections[1].keyword,
            "instructs the Secretary-General"
        );
        assert_eq!(
            document.operative_sections[1].paragraphs,
            vec![NumberedParagraph::new("", "to report.")]
        );
        assert!(document.annexes.is_empty());
    }

    #[test]
    fn test_parse_without_formula() {
        let document = parser().parse("decides\n1\nto act\n2\nto stop", &entry());
        assert_eq!(document.enacting_formula, "");
        assert_eq!(document.paragraph_count(), 2);
    }

    #[test]
    fn test_parse_without_keywords_keeps_one_section() {
        let document = parser().parse("Some free text\nspanning lines", &entry());
        assert!(document.preamble_sections.is_empty());
        assert_eq!(document.operative_sections.len(), 1);
        assert_eq!(document.operative_sections[0].keyword, "");
        assert_eq!(
            document.operative_sections[0].paragraphs,
            vec![NumberedParagraph::new("", "Some free text spanning lines")]
        );
    }

    #[test]
    fn test_parse_empty_text() {
        let document = parser().parse("  \n ", &entry());
        assert!(document.preamble_sections.is_empty());
        assert!(document.operative_sections.is_empty());
    }

    #[test]
    fn test_parse_with_annex() {
        let text = "decides\n1\nto adopt the annexed plan\nANNEX\nStrategic plan\n\nGoal 1";
        let document = parser().parse(text, &entry());
        assert_eq!(document.paragraph_count(), 1);
        assert_eq!(
            document.annexes,
            vec!["ANNEX Strategic plan\n\nGoal 1".to_string()]
        );
    }

    #[test]
    fn test_formula_follows_conference() {
        let conference = Conference {
            location: "Busan".to_string(),
            year: "2014".to_string(),
            ..Conference::default()
        };
        let parser = StructuralParser::new(&conference, ParserConfig::default()).unwrap();
        let document = parser.parse(
            "The Plenipotentiary Conference (Busan, 2014),\ndecides\nto act\n",
            &entry(),
        );
        assert_eq!(
            document.enacting_formula,
            "The Plenipotentiary Conference (Busan, 2014),"
        );
        assert_eq!(document.operative_sections[0].paragraphs[0].text, "to act");
    }

    #[test]
    fn test_parse_document_helper() {
        let document = parse_document(
            "resolves\n7 that it is necessary\n",
            &entry(),
            &Conference::default(),
            ParserConfig::default(),
        )
        .unwrap();
        assert_eq!(document.operative_sections[0].paragraphs[0].num, "7");
    }
}
