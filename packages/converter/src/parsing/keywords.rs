//! Trigger phrases that open preamble and operative sections.

use std::sync::LazyLock;

use crate::types::SectionKind;

const PREAMBLE_PHRASES: &[&str] = &[
    "considering further",
    "considering",
    "noting with satisfaction",
    "noting with concern",
    "noting further",
    "noting",
    "recalling further",
    "recalling",
    "recognizing further",
    "recognizing",
    "bearing in mind",
    "having examined",
    "having considered",
    "having regard",
    "having reviewed",
    "taking into account",
    "taking note",
    "aware",
    "conscious",
    "convinced",
    "concerned",
    "deeply concerned",
    "emphasizing",
    "affirming",
    "reaffirming",
    "acknowledging",
    "appreciating",
    "welcoming",
    "mindful",
    "determined",
    "expressing",
    "stressing",
    "underlining",
    "observing",
    "encouraged",
];

const OPERATIVE_PHRASES: &[&str] = &[
    "resolves further",
    "resolves",
    "decides further",
    "decides",
    "instructs the Secretary-General",
    "instructs the Director",
    "instructs the ITU Council",
    "instructs the Council",
    "instructs the General Secretariat",
    "instructs",
    "further instructs the Secretary-General",
    "further instructs the Director",
    "further instructs the ITU Council",
    "further instructs the Council",
    "further instructs",
    "invites Member States",
    "invites Sector Members",
    "invites the Secretary-General",
    "invites the Director",
    "invites the ITU Council",
    "invites the Council",
    "invites",
    "requests the Secretary-General",
    "requests the Director",
    "requests the Council",
    "requests",
    "urges Member States",
    "urges",
    "encourages Member States",
    "encourages",
    "calls upon",
    "recommends",
    "authorizes the Secretary-General",
    "authorizes",
    "charges the Council",
    "charges",
    "appeals to",
];

/// A trigger phrase and the kind of section it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub phrase: &'static str,
    pub kind: SectionKind,
}

fn sorted(phrases: &[&'static str], kind: SectionKind) -> Vec<Keyword> {
    let mut keywords: Vec<Keyword> = phrases
        .iter()
        .map(|phrase| Keyword { phrase, kind })
        .collect();
    // Stable: equal-length phrases keep their listed order.
    keywords.sort_by(|a, b| b.phrase.len().cmp(&a.phrase.len()));
    keywords
}

/// Preamble triggers, longest first.
pub static PREAMBLE_KEYWORDS: LazyLock<Vec<Keyword>> =
    LazyLock::new(|| sorted(PREAMBLE_PHRASES, SectionKind::Preamble));

/// Operative triggers, longest first.
pub static OPERATIVE_KEYWORDS: LazyLock<Vec<Keyword>> =
    LazyLock::new(|| sorted(OPERATIVE_PHRASES, SectionKind::Operative));

/// All triggers in lookup order.
pub fn keywords() -> impl Iterator<Item = &'static Keyword> {
    PREAMBLE_KEYWORDS.iter().chain(OPERATIVE_KEYWORDS.iter())
}

/// Look up a line that consists of a trigger phrase and nothing else.
///
/// Matching ignores ASCII case and surrounding whitespace. A line holding a
/// longer phrase resolves to that phrase, never to a shorter phrase it
/// contains.
///
/// # Examples
/// ```
/// use akn4itu_converter::parsing::lookup_header;
///
/// let keyword = lookup_header("  further instructs the Secretary-General ").unwrap();
/// assert_eq!(keyword.phrase, "further instructs the Secretary-General");
/// assert!(lookup_header("instructs the Secretary-General to report").is_none());
/// ```
#[must_use]
pub fn lookup_header(line: &str) -> Option<&'static Keyword> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    keywords().find(|k| k.phrase.eq_ignore_ascii_case(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_sorted_longest_first() {
        for list in [&*PREAMBLE_KEYWORDS, &*OPERATIVE_KEYWORDS] {
            assert!(list
                .windows(2)
                .all(|pair| pair[0].phrase.len() >= pair[1].phrase.len()));
        }
        assert_eq!(
            OPERATIVE_KEYWORDS[0].phrase,
            "further instructs the Secretary-General"
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_lengths() {
        // "resolves" and "requests" are both 8 characters long.
        let position = |phrase: &str| {
            OPERATIVE_KEYWORDS
                .iter()
                .position(|k| k.phrase == phrase)
                .unwrap()
        };
        assert!(position("resolves") < position("requests"));
    }

    #[test]
    fn test_longer_phrase_wins() {
        let keyword = lookup_header("further instructs the Secretary-General").unwrap();
        assert_eq!(keyword.phrase, "further instructs the Secretary-General");
        assert_eq!(keyword.kind, SectionKind::Operative);

        assert_eq!(lookup_header("instructs").unwrap().phrase, "instructs");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let keyword = lookup_header("Considering Further").unwrap();
        assert_eq!(keyword.phrase, "considering further");
        assert_eq!(keyword.kind, SectionKind::Preamble);
    }

    #[test]
    fn test_lookup_rejects_prose() {
        assert!(lookup_header("considering that the Union").is_none());
        assert!(lookup_header("").is_none());
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(PREAMBLE_KEYWORDS.len(), 35);
        assert_eq!(OPERATIVE_KEYWORDS.len(), 37);
    }
}
