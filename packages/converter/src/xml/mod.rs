//! XML reading utilities.

mod utils;

pub use utils::{
    count_descendants, find_by_path, find_child, find_children, get_tag_name, get_text, has_tag,
};
