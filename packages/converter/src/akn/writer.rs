//! XML serialization and file output.

use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::builder::AknBuilder;
use super::element::{Element, Node};
use crate::error::{ConverterError, Result};
use crate::types::DocumentCollection;

/// Subdirectory that receives one file per document.
pub const INDIVIDUAL_DIR: &str = "individual";

fn xml_error(e: impl std::fmt::Display) -> ConverterError {
    ConverterError::XmlWrite(e.to_string())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children().is_empty() {
        writer.write_event(Event::Empty(start)).map_err(xml_error)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(xml_error)?;
    for child in element.children() {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(xml_error)?;
    Ok(())
}

/// Serialize a tree to UTF-8 XML with a declaration and two-space indent.
///
/// # Examples
/// ```
/// use akn4itu_converter::akn::{to_xml_string, Element};
///
/// let xml = to_xml_string(&Element::new("p").with_text("a & b")).unwrap();
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
/// assert!(xml.contains("<p>a &amp; b</p>"));
/// ```
pub fn to_xml_string(root: &Element) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    write_element(&mut writer, root)?;

    let bytes = writer.into_inner().into_inner();
    let mut xml = String::from_utf8(bytes).map_err(xml_error)?;
    xml.push('\n');
    Ok(xml)
}

/// Write a tree to `path`.
///
/// Writes to a temporary file in the same directory, syncs it, then renames
/// it over the target.
pub fn save_xml(root: &Element, path: &Path) -> Result<()> {
    let xml = to_xml_string(root)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(xml.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    if path.exists() {
        fs::remove_file(path)?;
    }
    fs::rename(&temp_file, path)?;

    tracing::debug!(path = %path.display(), bytes = xml.len(), "Wrote XML");
    Ok(())
}

/// Write the collection file `<stem>_akn.xml` into `output_dir`.
pub fn save_collection(
    builder: &AknBuilder<'_>,
    collection: &DocumentCollection,
    output_dir: &Path,
    stem: &str,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("{stem}_akn.xml"));
    save_xml(&builder.build_collection(collection), &path)?;
    Ok(path)
}

/// Write one `<prefix>_<number>.xml` file per document into
/// `output_dir/individual`.
pub fn save_documents(
    builder: &AknBuilder<'_>,
    collection: &DocumentCollection,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let dir = output_dir.join(INDIVIDUAL_DIR);
    fs::create_dir_all(&dir)?;

    collection
        .documents()
        .map(|document| {
            let path = dir.join(format!("{}.xml", document.short_id()));
            save_xml(&builder.build_document(document), &path)?;
            Ok(path)
        })
        .collect()
}
