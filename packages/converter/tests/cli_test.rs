//! Tests for the command-line binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn converter() -> Command {
    Command::cargo_bin("akn4itu-converter").unwrap()
}

#[test]
fn test_convert_writes_collection_and_individual_files() {
    let temp_dir = tempfile::tempdir().unwrap();

    converter()
        .arg("convert")
        .arg(fixture_path("two_documents.json"))
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--individual")
        .arg("--markup-date")
        .arg("2024-05-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found"))
        .stdout(predicate::str::contains("Resolutions: 1 documents"));

    let collection = temp_dir.path().join("two_documents_akn.xml");
    assert!(collection.exists());
    assert!(temp_dir.path().join("individual").join("res_1.xml").exists());
    assert!(temp_dir.path().join("individual").join("dec_7.xml").exists());

    let xml = std::fs::read_to_string(collection).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("date=\"2024-05-01\""));
}

#[test]
fn test_convert_empty_corpus_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    converter()
        .arg("convert")
        .arg(fixture_path("no_documents.json"))
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No documents recognized"))
        .stderr(predicate::str::contains("no_documents.json"));

    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_convert_rejects_invalid_markup_date() {
    let temp_dir = tempfile::tempdir().unwrap();

    converter()
        .arg("convert")
        .arg(fixture_path("two_documents.json"))
        .arg("-o")
        .arg(temp_dir.path())
        .arg("--markup-date")
        .arg("16/11/2018")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_convert_unsupported_corpus_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    let corpus = temp_dir.path().join("corpus.txt");
    std::fs::write(&corpus, "plain text").unwrap();

    converter()
        .arg("convert")
        .arg(&corpus)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported corpus format"));
}

#[test]
fn test_inspect_prints_counts() {
    let temp_dir = tempfile::tempdir().unwrap();

    converter()
        .arg("convert")
        .arg(fixture_path("with_annex.yaml"))
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .success();

    converter()
        .arg("inspect")
        .arg(temp_dir.path().join("with_annex_akn.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("RESOLUTION 9 (Dubai, 2018)"))
        .stdout(predicate::str::contains("paragraphs: 2"))
        .stdout(predicate::str::contains("attachments: 1"))
        .stdout(predicate::str::contains("Statements: 1"));
}
