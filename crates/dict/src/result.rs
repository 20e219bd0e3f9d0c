// ABOUTME: LookupResult struct holding the translations extracted for one word.
// ABOUTME: Includes a numbered-list formatting helper used by the CLI.

use serde::{Deserialize, Serialize};

/// The result of looking up one word: the ordered translation candidates
/// that survived filtering and truncation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LookupResult {
    pub word: String,
    pub url: String,
    pub translations: Vec<String>,
}

impl LookupResult {
    /// Returns true if no translations were found. Not an error condition.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Format the translations as a 1-indexed numbered list, one per line.
    pub fn numbered(&self) -> String {
        self.translations
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numbered_list() {
        let result = LookupResult {
            word: "haus".to_string(),
            url: String::new(),
            translations: vec!["house".to_string(), "home".to_string()],
        };
        assert_eq!(result.numbered(), "1. house\n2. home");
        assert!(!result.is_empty());
    }

    #[test]
    fn test_empty_result() {
        let result = LookupResult::default();
        assert!(result.is_empty());
        assert_eq!(result.numbered(), "");
    }
}
