//! Akoma Ntoso (AKN4UN) markup output.
//!
//! - [`element`]: owned markup tree
//! - [`eid`]: identifier slugs
//! - [`builder`]: document tree to markup tree
//! - [`writer`]: markup tree to XML files

pub mod builder;
pub mod eid;
pub mod element;
pub mod writer;

pub use builder::AknBuilder;
pub use eid::{slugify, UniqueIds};
pub use element::{Element, Node};
pub use writer::{save_collection, save_documents, save_xml, to_xml_string};
