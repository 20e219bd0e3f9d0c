// ABOUTME: Candidate filter deciding whether a string is a plausible standalone translation.
// ABOUTME: Pure predicate combining a shape regex with a denylist of known UI terms.

use once_cell::sync::Lazy;
use regex::Regex;

/// A candidate must start and end with a letter and contain only letters,
/// whitespace, and hyphens in between. Single letters do not match: the
/// pattern requires distinct first and last letter positions.
static SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z\s-]*[a-zA-Z]$").unwrap());

/// Lowercase terms that mark a string as page chrome rather than a
/// translation. Matched by substring containment, not whole word, so a
/// word like "oversee" is rejected for containing "see".
const DENYLIST: &[&str] = &[
    "translation",
    "overview",
    "examples",
    "show",
    "hide",
    "click",
    "tap",
    "more",
    "less",
    "see",
    "view",
    "german",
    "english",
    "noun",
    "verb",
    "adjective",
];

/// Returns true if the trimmed candidate string looks like a standalone
/// translation: it passes the shape rule and contains no denylisted term.
pub fn is_valid_translation(s: &str) -> bool {
    if !SHAPE_RE.is_match(s) {
        return false;
    }

    let lower = s.to_lowercase();
    !DENYLIST.iter().any(|term| lower.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_letter_minimum() {
        assert!(is_valid_translation("ab"));
        // The pattern needs distinct first and last letters, so a single
        // letter never matches even before the caller's length pre-check.
        assert!(!is_valid_translation("a"));
        assert!(!is_valid_translation(""));
    }

    #[test]
    fn test_letters_spaces_hyphens_only() {
        assert!(is_valid_translation("house"));
        assert!(is_valid_translation("well-known"));
        assert!(is_valid_translation("give up"));
        assert!(!is_valid_translation("a1b"));
        assert!(!is_valid_translation("house!"));
        assert!(!is_valid_translation("house,"));
        assert!(!is_valid_translation("-house"));
        assert!(!is_valid_translation("house-"));
        assert!(!is_valid_translation(" house"));
    }

    #[test]
    fn test_denylist_substring_containment() {
        assert!(!is_valid_translation("click here"));
        assert!(!is_valid_translation("Show all"));
        assert!(!is_valid_translation("oversee"));
        assert!(!is_valid_translation("Germanic"));
        assert!(!is_valid_translation("adverb"));
        assert!(is_valid_translation("home"));
        assert!(is_valid_translation("dwelling"));
    }

    #[test]
    fn test_denylist_is_case_insensitive() {
        assert!(!is_valid_translation("CLICK"));
        assert!(!is_valid_translation("More"));
    }
}
