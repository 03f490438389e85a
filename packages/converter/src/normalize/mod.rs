//! Text clean-up applied before structural parsing.
//!
//! - `page`: removes the running header (document reference and page
//!   number) from the top of each page.
//! - `text`: folds typographic characters, collapses whitespace and strips
//!   characters that are not allowed in XML 1.0.

mod page;
mod text;

pub use page::clean_page_text;
pub use text::{clean_whitespace, fold_typography, normalize_text, strip_control_chars};
