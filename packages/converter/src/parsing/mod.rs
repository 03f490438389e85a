//! Structural parsing of document text.
//!
//! A document span goes through these steps:
//!
//! 1. Normalization of characters and whitespace
//! 2. Annex split: the first upper-case ANNEX heading ends the body
//! 3. Enacting formula extraction
//! 4. Section segmentation at lines holding a trigger keyword
//! 5. Recitals (preamble) or numbered paragraphs (operative) per section
//! 6. Dotted or lettered sub-items per numbered paragraph
//!
//! Each step has a defined fallback, so parsing never aborts.

mod annex;
mod classify;
mod engine;
mod keywords;
mod labeled;
mod lines;
mod sections;

pub use annex::{is_annex_heading, split_annexes};
pub use classify::{classify, LineKind, Marker, MarkerStyle};
pub use engine::{parse_document, StructuralParser};
pub use keywords::{keywords, lookup_header, Keyword, OPERATIVE_KEYWORDS, PREAMBLE_KEYWORDS};
pub use labeled::{parse_paragraphs, parse_recitals, split_labeled, LabeledPart, LabeledSplit};
pub use sections::{find_section_hits, split_sections, RawSection, SectionHit};
