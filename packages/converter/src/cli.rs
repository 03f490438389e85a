//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::akn::{save_collection, save_documents, AknBuilder};
use crate::config::{validate_date, ConversionConfig};
use crate::converter::convert;
use crate::error::{ConverterError, Result};
use crate::source::CorpusFile;
use crate::summary::{MarkupKind, MarkupSummary};

/// Number of documents listed per part in the conversion summary.
const PREVIEW_DOCUMENTS: usize = 3;

/// AKN4ITU Converter - Convert ITU Final Acts into Akoma Ntoso (AKN4UN) XML.
#[derive(Parser)]
#[command(name = "akn4itu-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a page-text corpus (JSON or YAML) to AKN4UN XML.
    Convert {
        /// Corpus file with pages and outline
        corpus: PathBuf,

        /// Output directory (default: directory of the corpus file)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Also write each document as a separate XML file
        #[arg(short, long)]
        individual: bool,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Markup date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        markup_date: Option<String>,
    },

    /// Print per-document counts of an emitted AKN file.
    Inspect {
        /// AKN XML file
        xml: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            corpus,
            output_dir,
            individual,
            config,
            markup_date,
        } => convert_command(
            &corpus,
            output_dir.as_deref(),
            individual,
            config.as_deref(),
            markup_date.as_deref(),
        ),
        Commands::Inspect { xml } => inspect_command(&xml),
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the convert command.
fn convert_command(
    corpus_path: &Path,
    output_dir: Option<&Path>,
    individual: bool,
    config_path: Option<&Path>,
    markup_date: Option<&str>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ConversionConfig::from_yaml_file(path)?,
        None => ConversionConfig::default(),
    };
    if let Some(date) = markup_date {
        validate_date(date)?;
        config = config.with_markup_date(date);
    }

    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => corpus_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let stem = corpus_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "final_acts".to_string());

    println!(
        "{} {}",
        style("Converting").bold(),
        style(corpus_path.display()).cyan()
    );
    println!();

    let pb = spinner();
    pb.set_message("Reading corpus...");

    let corpus = match CorpusFile::from_path(corpus_path) {
        Ok(corpus) => corpus,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Parsing document structure...");

    let collection = match convert(&corpus, &config) {
        Ok(collection) => collection,
        Err(ConverterError::EmptyCorpus { .. }) => {
            pb.finish_and_clear();
            return Err(ConverterError::EmptyCorpus {
                source_name: Some(corpus_path.display().to_string()),
            });
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing XML...");

    let builder = AknBuilder::new(&config);
    let written = save_collection(&builder, &collection, &output_dir, &stem).and_then(|path| {
        let documents = if individual {
            save_documents(&builder, &collection, &output_dir)?
        } else {
            Vec::new()
        };
        Ok((path, documents))
    });

    pb.finish_and_clear();
    let (collection_path, document_paths) = written?;

    println!(
        "  Found {} documents across {} parts:",
        style(collection.document_count()).green(),
        collection.part_count()
    );
    for (part, documents) in collection.parts() {
        println!("    {}: {} documents", style(part).bold(), documents.len());
        for document in documents.iter().take(PREVIEW_DOCUMENTS) {
            let title: String = document.title.chars().take(60).collect();
            println!(
                "      - {} {}: {}",
                document.category.as_str(),
                document.number,
                title
            );
        }
        if documents.len() > PREVIEW_DOCUMENTS {
            println!("      ... and {} more", documents.len() - PREVIEW_DOCUMENTS);
        }
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        collection_path.display()
    );
    if !document_paths.is_empty() {
        println!(
            "{} {} files in {}",
            style("Individual:").green().bold(),
            document_paths.len(),
            output_dir.join(crate::akn::writer::INDIVIDUAL_DIR).display()
        );
    }

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(xml_path: &Path) -> Result<()> {
    let summary = MarkupSummary::from_path(xml_path)?;

    let kind = match summary.kind {
        MarkupKind::Statement => "statement",
        MarkupKind::Collection => "documentCollection",
        MarkupKind::Unknown => "unknown",
    };
    println!(
        "{} {} ({})",
        style("Inspecting").bold(),
        style(xml_path.display()).cyan(),
        kind
    );
    if !summary.parts.is_empty() {
        println!("  Parts: {}", summary.parts.join(", "));
    }
    println!();

    for statement in &summary.statements {
        println!("  {}", style(&statement.heading).green());
        println!(
            "    recitals: {}, paragraphs: {}, points: {}, attachments: {}",
            statement.recitals, statement.paragraphs, statement.points, statement.attachments
        );
    }

    println!();
    println!("  Statements: {}", summary.statements.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["akn4itu-converter", "convert", "pp18.json"]);

        let Commands::Convert {
            corpus,
            output_dir,
            individual,
            config,
            markup_date,
        } = cli.command
        else {
            panic!("expected convert command");
        };
        assert_eq!(corpus, PathBuf::from("pp18.json"));
        assert!(output_dir.is_none());
        assert!(!individual);
        assert!(config.is_none());
        assert!(markup_date.is_none());
    }

    #[test]
    fn test_cli_parse_convert_with_options() {
        let cli = Cli::parse_from([
            "akn4itu-converter",
            "convert",
            "pp18.yaml",
            "--output-dir",
            "out",
            "--individual",
            "--markup-date",
            "2024-05-01",
        ]);

        let Commands::Convert {
            output_dir,
            individual,
            markup_date,
            ..
        } = cli.command
        else {
            panic!("expected convert command");
        };
        assert_eq!(output_dir, Some(PathBuf::from("out")));
        assert!(individual);
        assert_eq!(markup_date, Some("2024-05-01".to_string()));
    }

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::parse_from(["akn4itu-converter", "inspect", "out.xml"]);
        let Commands::Inspect { xml } = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(xml, PathBuf::from("out.xml"));
    }
}
