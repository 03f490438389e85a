//! Error types for the converter.
//!
//! Only conditions that stop a conversion are errors. Unrecognized outline
//! entries, segments that fail to match a pattern and stray control
//! characters are handled by the parser's fallbacks and never surface here.

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The outline did not yield a single recognizable document.
    #[error("No documents recognized in corpus{}", source_suffix(.source_name))]
    EmptyCorpus { source_name: Option<String> },

    /// A page index outside the corpus was requested.
    #[error("Page {index} out of range (corpus has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    /// Corpus file extension is not one we can deserialize.
    #[error("Unsupported corpus format: '{0}'. Expected .json, .yaml or .yml")]
    UnsupportedCorpusFormat(String),

    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2018-11-15)")]
    InvalidDate(String),

    /// Configuration value rejected during validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing markup failed.
    #[error("XML serialization failed: {0}")]
    XmlWrite(String),

    /// Reading markup back failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON corpus could not be read.
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML corpus or configuration could not be read.
    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

fn source_suffix(source_name: &Option<String>) -> String {
    source_name
        .as_ref()
        .map(|name| format!(" {name}"))
        .unwrap_or_default()
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;
