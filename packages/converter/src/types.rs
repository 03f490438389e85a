//! Core data types for the converter.
//!
//! These types form the canonical document tree: a collection of parts, each
//! holding documents, each split into preamble and operative sections down to
//! lettered or dotted sub-items. Every sequence is kept in source order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Kind of deliberation adopted by the conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentCategory {
    Resolution,
    Decision,
    Recommendation,
}

impl DocumentCategory {
    /// Upper-case form as printed in the Final Acts.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolution => "RESOLUTION",
            Self::Decision => "DECISION",
            Self::Recommendation => "RECOMMENDATION",
        }
    }

    /// Lower-case form, used as the statement `name`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resolution => "resolution",
            Self::Decision => "decision",
            Self::Recommendation => "recommendation",
        }
    }

    /// Three-letter prefix used in identifiers and file names.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Resolution => "res",
            Self::Decision => "dec",
            Self::Recommendation => "rec",
        }
    }

    /// Parse the upper-case heading word.
    #[must_use]
    pub fn from_heading(word: &str) -> Option<Self> {
        match word {
            "RESOLUTION" => Some(Self::Resolution),
            "DECISION" => Some(Self::Decision),
            "RECOMMENDATION" => Some(Self::Recommendation),
            _ => None,
        }
    }
}

/// Whether a trigger keyword opens a preamble or an operative section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Preamble,
    Operative,
}

/// A labeled (or unlabeled lead-in) clause. Recitals and sub-items share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubItem {
    /// List marker such as "a)" or "1.1"; empty for a lead-in.
    pub label: String,

    /// Whitespace-normalized text.
    pub text: String,
}

impl SubItem {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Preamble clauses use the same shape as sub-items.
pub type Recital = SubItem;

/// A numbered operative paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedParagraph {
    /// Ordinal label ("1", "2.1"), empty for an unnumbered paragraph.
    pub num: String,

    /// Paragraph text, or the lead fragment when sub-items were found.
    pub text: String,

    /// Sub-items; only non-empty when sub-numbering was detected.
    pub sub_items: Vec<SubItem>,
}

impl NumberedParagraph {
    #[must_use]
    pub fn new(num: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            num: num.into(),
            text: text.into(),
            sub_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sub_items(mut self, sub_items: Vec<SubItem>) -> Self {
        self.sub_items = sub_items;
        self
    }
}

/// A preamble block opened by a keyword such as "considering".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreambleSection {
    pub keyword: String,
    pub recitals: Vec<Recital>,
}

/// An operative block opened by a keyword such as "resolves".
///
/// The keyword is empty only for the fallback section that holds a document
/// body in which no trigger keyword was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperativeSection {
    pub keyword: String,
    pub paragraphs: Vec<NumberedParagraph>,
}

/// A single resolution, decision or recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentItem {
    pub category: DocumentCategory,

    /// Document number, e.g. "2".
    pub number: String,

    /// Revision tag, e.g. "Rev. Dubai, 2018".
    pub revision: String,

    /// Descriptive title from the outline.
    pub title: String,

    /// "The Plenipotentiary Conference ... (Dubai, 2018)," text.
    pub enacting_formula: String,

    pub preamble_sections: Vec<PreambleSection>,
    pub operative_sections: Vec<OperativeSection>,

    /// Annex text blocks, heading included.
    pub annexes: Vec<String>,
}

impl DocumentItem {
    /// Create a document with identity fields only.
    #[must_use]
    pub fn new(
        category: DocumentCategory,
        number: impl Into<String>,
        revision: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            category,
            number: number.into(),
            revision: revision.into(),
            title: title.into(),
            enacting_formula: String::new(),
            preamble_sections: Vec::new(),
            operative_sections: Vec::new(),
            annexes: Vec::new(),
        }
    }

    /// Identifier of this document within a collection, e.g. "res_2".
    #[must_use]
    pub fn short_id(&self) -> String {
        format!("{}_{}", self.category.prefix(), self.number)
    }

    /// Total number of recitals across all preamble sections.
    #[must_use]
    pub fn recital_count(&self) -> usize {
        self.preamble_sections.iter().map(|s| s.recitals.len()).sum()
    }

    /// Total number of paragraphs across all operative sections.
    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        self.operative_sections
            .iter()
            .map(|s| s.paragraphs.len())
            .sum()
    }

    /// Total number of sub-items across all paragraphs.
    #[must_use]
    pub fn sub_item_count(&self) -> usize {
        self.operative_sections
            .iter()
            .flat_map(|s| &s.paragraphs)
            .map(|p| p.sub_items.len())
            .sum()
    }
}

/// All documents of a corpus grouped by part, in outline order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCollection {
    parts: IndexMap<String, Vec<DocumentItem>>,
}

impl DocumentCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document to a part, creating the part on first use.
    pub fn push(&mut self, part: impl Into<String>, document: DocumentItem) {
        self.parts.entry(part.into()).or_default().push(document);
    }

    /// Parts in first-appearance order.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &[DocumentItem])> {
        self.parts
            .iter()
            .map(|(name, docs)| (name.as_str(), docs.as_slice()))
    }

    /// Documents of one part.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&[DocumentItem]> {
        self.parts.get(name).map(Vec::as_slice)
    }

    /// All documents, part by part.
    pub fn documents(&self) -> impl Iterator<Item = &DocumentItem> {
        self.parts.values().flatten()
    }

    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn document_count(&self) -> usize {
        self.parts.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.document_count() == 0
    }
}
