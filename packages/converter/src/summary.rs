//! Read emitted markup back into per-document counts.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::Result;
use crate::xml::{count_descendants, find_by_path, find_child, find_children, get_text, has_tag};

/// Whether a markup file holds a single statement or a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    Statement,
    Collection,
    Unknown,
}

/// Counts for one `statement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSummary {
    /// Statement `name`, e.g. "resolution".
    pub name: String,

    /// Text of `docType` and `docNumber`, e.g. "RESOLUTION 2 (Rev. Dubai, 2018)".
    pub heading: String,

    pub title: String,
    pub recitals: usize,
    pub paragraphs: usize,
    pub points: usize,
    pub attachments: usize,
}

/// Summary of a markup file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSummary {
    pub kind: MarkupKind,

    /// Part names from the collection body, empty for a single statement.
    pub parts: Vec<String>,

    pub statements: Vec<StatementSummary>,
}

impl MarkupSummary {
    /// Summarize an XML string.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();

        let kind = if find_child(root, "documentCollection").is_some() {
            MarkupKind::Collection
        } else if find_child(root, "statement").is_some() {
            MarkupKind::Statement
        } else {
            MarkupKind::Unknown
        };

        let parts = find_by_path(root, "documentCollection/collectionBody")
            .map(|body| {
                find_children(body, "component")
                    .filter_map(|c| find_child(c, "componentRef"))
                    .filter_map(|r| r.attribute("showAs"))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let statements = root
            .descendants()
            .filter(|n| has_tag(*n, "statement"))
            .map(summarize_statement)
            .collect();

        Ok(Self {
            kind,
            parts,
            statements,
        })
    }

    /// Summarize an XML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let xml = fs::read_to_string(path)?;
        Self::from_xml(&xml)
    }
}

fn summarize_statement(statement: Node<'_, '_>) -> StatementSummary {
    let text_at = |path: &str| find_by_path(statement, path).map(get_text).unwrap_or_default();

    let heading = [
        text_at("preface/longTitle/p/docType"),
        text_at("preface/longTitle/p/docNumber"),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" ");

    let count_in = |path: &str, tag: &str| {
        find_child(statement, path)
            .map(|n| count_descendants(n, tag))
            .unwrap_or(0)
    };

    StatementSummary {
        name: statement.attribute("name").unwrap_or_default().to_string(),
        heading,
        title: text_at("preface/container/p"),
        recitals: count_in("preamble", "recital"),
        paragraphs: count_in("mainBody", "paragraph"),
        points: count_in("mainBody", "point"),
        attachments: count_in("attachments", "attachment"),
    }
}
