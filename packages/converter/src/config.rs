//! Configuration constants, conversion settings and validation functions.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConverterError, Result};

/// Akoma Ntoso 3.0 namespace.
pub const AKN_NAMESPACE: &str = "http://docs.oasis-open.org/legaldocml/ns/akn/3.0";

/// Name attribute of the top-level `documentCollection`.
pub const COLLECTION_NAME: &str = "finalActs";

/// Part assigned to documents that appear before any part header.
pub const DEFAULT_PART: &str = "other";

/// Extra characters beyond the previous keyword's length inside which a
/// following header hit is discarded.
pub const DEFAULT_OVERLAP_WINDOW: usize = 5;

/// Number of lines at the top of a page searched for the running header.
pub const DEFAULT_HEADER_SCAN_LINES: usize = 5;

/// Maximum length of a slugged identifier.
pub const DEFAULT_EID_MAX_LEN: usize = 50;

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Identity of the conference whose Final Acts are converted.
///
/// Drives the enacting-formula pattern, the FRBR URIs and the collection
/// preface. Defaults describe the Plenipotentiary Conference (Dubai, 2018).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conference {
    /// Conference name as it appears after "The" in the enacting formula.
    pub name: String,

    /// Host city.
    pub location: String,

    /// Conference year.
    pub year: String,

    /// Adoption date in YYYY-MM-DD format.
    pub date: String,

    /// Identifier of the adopting body, used in URIs and `href`s.
    pub body: String,

    /// Work number of the Final Acts publication.
    pub publication: String,

    /// Human-readable label of the publication.
    pub publication_label: String,
}

impl Default for Conference {
    fn default() -> Self {
        Self {
            name: "Plenipotentiary Conference".to_string(),
            location: "Dubai".to_string(),
            year: "2018".to_string(),
            date: "2018-11-15".to_string(),
            body: "itu-pp".to_string(),
            publication: "pp-18-final-acts".to_string(),
            publication_label: "Final Acts PP-18".to_string(),
        }
    }
}

impl Conference {
    /// Opening phrase of every enacting formula, e.g. "The Plenipotentiary Conference".
    #[must_use]
    pub fn formula_opening(&self) -> String {
        format!("The {}", self.name)
    }

    /// Display name of the adopting body, e.g.
    /// "ITU Plenipotentiary Conference (Dubai, 2018)".
    #[must_use]
    pub fn body_label(&self) -> String {
        format!("ITU {} ({}, {})", self.name, self.location, self.year)
    }
}

/// Tuning knobs of the page cleaner and the structural parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// See [`DEFAULT_OVERLAP_WINDOW`].
    pub overlap_window: usize,

    /// See [`DEFAULT_HEADER_SCAN_LINES`].
    pub header_scan_lines: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            overlap_window: DEFAULT_OVERLAP_WINDOW,
            header_scan_lines: DEFAULT_HEADER_SCAN_LINES,
        }
    }
}

/// Settings for a full conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Conference identity.
    pub conference: Conference,

    /// Parser tuning.
    pub parser: ParserConfig,

    /// See [`DEFAULT_EID_MAX_LEN`].
    pub eid_max_len: usize,

    /// Date recorded in the manifestation metadata (YYYY-MM-DD).
    ///
    /// Fixed per run so that emitting the same tree twice is byte-identical.
    pub markup_date: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            conference: Conference::default(),
            parser: ParserConfig::default(),
            eid_max_len: DEFAULT_EID_MAX_LEN,
            markup_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

impl ConversionConfig {
    /// Load a configuration from a YAML file. Missing keys keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the markup date.
    #[must_use]
    pub fn with_markup_date(mut self, date: impl Into<String>) -> Self {
        self.markup_date = date.into();
        self
    }

    /// Check dates and limits.
    pub fn validate(&self) -> Result<()> {
        validate_date(&self.conference.date)?;
        validate_date(&self.markup_date)?;
        if self.eid_max_len == 0 {
            return Err(ConverterError::InvalidConfig(
                "eid_max_len must be greater than zero".to_string(),
            ));
        }
        if self.parser.header_scan_lines == 0 {
            return Err(ConverterError::InvalidConfig(
                "header_scan_lines must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Validate date format (YYYY-MM-DD).
///
/// # Examples
/// ```
/// use akn4itu_converter::config::validate_date;
///
/// assert!(validate_date("2018-11-15").is_ok());
/// assert!(validate_date("invalid").is_err());
/// assert!(validate_date("2018-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(ConverterError::InvalidDate(date_str.to_string()));
    }

    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ConverterError::InvalidDate(date_str.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_date_valid() {
        assert!(validate_date("2018-11-15").is_ok());
        assert!(validate_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_validate_date_invalid_format() {
        assert!(validate_date("").is_err());
        assert!(validate_date("2018/11/15").is_err());
        assert!(validate_date("15-11-2018").is_err());
        assert!(validate_date("2018-1-1").is_err());
    }

    #[test]
    fn test_validate_date_invalid_date() {
        assert!(validate_date("2018-13-01").is_err());
        assert!(validate_date("2018-02-30").is_err());
        assert!(validate_date("2018-00-01").is_err());
    }

    #[test]
    fn test_conference_defaults() {
        let conference = Conference::default();
        assert_eq!(conference.formula_opening(), "The Plenipotentiary Conference");
        assert_eq!(
            conference.body_label(),
            "ITU Plenipotentiary Conference (Dubai, 2018)"
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ConversionConfig::default();
        assert_eq!(config.parser.overlap_window, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_eid_length() {
        let config = ConversionConfig {
            eid_max_len: 0,
            ..ConversionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConverterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_yaml_file_partial_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "conference:\n  location: Bucharest\n  year: '2022'\n  date: '2022-10-14'\nmarkup_date: '2023-01-01'\nparser:\n  overlap_window: 7"
        )
        .unwrap();

        let config = ConversionConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.conference.location, "Bucharest");
        assert_eq!(config.conference.name, "Plenipotentiary Conference");
        assert_eq!(config.parser.overlap_window, 7);
        assert_eq!(config.parser.header_scan_lines, DEFAULT_HEADER_SCAN_LINES);
        assert_eq!(config.markup_date, "2023-01-01");
        assert_eq!(config.eid_max_len, DEFAULT_EID_MAX_LEN);
    }

    #[test]
    fn test_from_yaml_file_rejects_bad_date() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "markup_date: yesterday").unwrap();

        assert!(matches!(
            ConversionConfig::from_yaml_file(file.path()),
            Err(ConverterError::InvalidDate(_))
        ));
    }
}
