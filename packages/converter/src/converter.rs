//! Conversion pipeline: locate documents, parse them, group them by part.

use rayon::prelude::*;

use crate::config::ConversionConfig;
use crate::error::{ConverterError, Result};
use crate::outline::{locate_boundaries, BoundaryEntry};
use crate::parsing::StructuralParser;
use crate::source::PageTextProvider;
use crate::types::{DocumentCollection, DocumentItem};

/// Convert a corpus into a document collection.
///
/// Page text is read and cleaned for every document first; documents are
/// then parsed in parallel and collected in outline order.
///
/// # Errors
/// Returns [`ConverterError::EmptyCorpus`] when the outline names no
/// recognizable document.
pub fn convert<P: PageTextProvider + ?Sized>(
    provider: &P,
    config: &ConversionConfig,
) -> Result<DocumentCollection> {
    config.validate()?;

    let boundaries = locate_boundaries(provider.outline(), provider.page_count());
    if boundaries.is_empty() {
        return Err(ConverterError::EmptyCorpus { source_name: None });
    }

    let spans: Vec<(BoundaryEntry, String)> = boundaries
        .into_iter()
        .map(|entry| {
            let text = provider.extract_text_range(
                entry.start_page,
                entry.end_page,
                config.parser.header_scan_lines,
            )?;
            Ok((entry, text))
        })
        .collect::<Result<_>>()?;

    let parser = StructuralParser::new(&config.conference, config.parser)?;

    let documents: Vec<(String, DocumentItem)> = spans
        .par_iter()
        .map(|(entry, text)| (entry.part.clone(), parser.parse(text, entry)))
        .collect();

    let mut collection = DocumentCollection::new();
    for (part, document) in documents {
        collection.push(part, document);
    }

    tracing::info!(
        documents = collection.document_count(),
        parts = collection.part_count(),
        "Converted corpus"
    );

    Ok(collection)
}
