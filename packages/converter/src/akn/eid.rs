//! Element identifiers.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static REPEATED_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid regex"));

/// Turn free text into an identifier fragment.
///
/// Lower-cases, replaces every character outside `[a-zA-Z0-9]` by `_`,
/// collapses repeats, trims underscores and caps the length at `max_len`
/// characters.
///
/// # Examples
/// ```
/// use akn4itu_converter::akn::slugify;
///
/// assert_eq!(slugify("instructs the Secretary-General", 50), "instructs_the_secretary_general");
/// assert_eq!(slugify("  Part (II) ", 50), "part_ii");
/// assert_eq!(slugify("considering further", 6), "consid");
/// ```
#[must_use]
pub fn slugify(text: &str, max_len: usize) -> String {
    let lower = text.to_lowercase();
    let replaced = NON_ALPHANUMERIC.replace_all(&lower, "_");
    let collapsed = REPEATED_UNDERSCORE.replace_all(&replaced, "_");
    collapsed.trim_matches('_').chars().take(max_len).collect()
}

/// Fragment for a list label: "b)" becomes "b", "1.2" becomes "1-2".
#[must_use]
pub fn label_fragment(label: &str) -> String {
    label.replace(')', "").replace('.', "-")
}

/// Hands out identifiers that are unique within one scope.
///
/// The first claim of a base returns it unchanged; later claims get an
/// ordinal suffix (`_2`, `_3`, ...).
#[derive(Debug, Default)]
pub struct UniqueIds {
    counts: HashMap<String, usize>,
}

impl UniqueIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_string()
        } else {
            format!("{base}_{count}")
        }
    }
}
