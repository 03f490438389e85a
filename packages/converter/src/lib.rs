//! AKN4ITU Converter - Convert ITU Final Acts into Akoma Ntoso (AKN4UN) XML.
//!
//! This crate reads the page text and outline of the Final Acts of an ITU
//! Plenipotentiary Conference, recovers the structure of every resolution,
//! decision and recommendation, and emits AKN4UN markup.
//!
//! # Example
//!
//! ```
//! use akn4itu_converter::{convert, AknBuilder, ConversionConfig, CorpusFile, OutlineEntry};
//! use akn4itu_converter::akn::to_xml_string;
//!
//! let corpus = CorpusFile::new(
//!     vec!["Dec. 5\n12\nDECISION 5\ndecides\n1\nto approve the budget\n".to_string()],
//!     vec![OutlineEntry::new(1, "DECISION 5 (Rev. Dubai, 2018) - Revenue and expenses", 1)],
//! );
//! let config = ConversionConfig::default().with_markup_date("2018-11-16");
//!
//! let collection = convert(&corpus, &config).unwrap();
//! assert_eq!(collection.document_count(), 1);
//!
//! let xml = to_xml_string(&AknBuilder::new(&config).build_collection(&collection)).unwrap();
//! assert!(xml.contains("<statement name=\"decision\""));
//! ```
//!
//! # Architecture
//!
//! The converter is organized into several modules:
//!
//! - [`config`]: Configuration constants, settings and validation
//! - [`types`]: Document tree (collection, documents, sections, paragraphs)
//! - [`error`]: Error types and Result alias
//! - [`source`]: Page text providers and corpus files
//! - [`normalize`]: Page header removal and text normalization
//! - [`outline`]: Document boundaries from the outline
//! - [`parsing`]: Structural parsing of document text
//! - [`akn`]: Markup tree, identifiers and XML output
//! - [`converter`]: Conversion pipeline
//! - [`xml`]: XML reading utilities
//! - [`summary`]: Per-document counts read back from markup
//! - [`cli`]: Command-line interface

pub mod akn;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod normalize;
pub mod outline;
pub mod parsing;
pub mod source;
pub mod summary;
pub mod types;
pub mod xml;

// Re-export main functions
pub use converter::convert;

// Re-export commonly used items
pub use akn::AknBuilder;
pub use config::{validate_date, Conference, ConversionConfig, ParserConfig};
pub use error::{ConverterError, Result};
pub use source::{CorpusFile, OutlineEntry, PageTextProvider};
pub use types::{
    DocumentCategory, DocumentCollection, DocumentItem, NumberedParagraph, OperativeSection,
    PreambleSection, Recital, SectionKind, SubItem,
};
