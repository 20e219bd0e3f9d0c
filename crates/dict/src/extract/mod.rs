// ABOUTME: Tree walker that collects translation candidates from a parsed dictionary page.
// ABOUTME: Depth-first traversal with an inherited example-region flag and order-preserving dedup.

use std::collections::HashSet;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

use crate::extract::filter::is_valid_translation;

pub mod filter;

/// Anchors pointing back to a translation page carry this href prefix.
pub const TRANSLATION_HREF_PREFIX: &str = "/english-german/";

/// Class-attribute substrings marking a subtree as example/usage content.
const EXAMPLE_CLASS_HINTS: &[&str] = &["example", "usage", "sentence"];

/// Accepted candidate length range, inclusive, after trimming.
const MIN_CANDIDATE_CHARS: usize = 2;
const MAX_CANDIDATE_CHARS: usize = 29;

/// Order-preserving deduplicating collector for accepted candidates.
#[derive(Debug, Default)]
struct Collector {
    accepted: Vec<String>,
    seen: HashSet<String>,
}

impl Collector {
    /// Offer one raw anchor text. Trims it, applies the length bounds and
    /// seen-set, then the filter predicate; accepted strings are appended
    /// in discovery order and marked seen (exact, case-sensitive match).
    fn offer(&mut self, raw: &str) {
        let text = raw.trim();
        if text.is_empty() {
            return;
        }

        let chars = text.chars().count();
        if !(MIN_CANDIDATE_CHARS..=MAX_CANDIDATE_CHARS).contains(&chars) {
            return;
        }

        if self.seen.contains(text) {
            return;
        }

        if is_valid_translation(text) {
            self.accepted.push(text.to_string());
            self.seen.insert(text.to_string());
        }
    }
}

/// Extract translation candidates from a parsed document, in document order,
/// deduplicated, with anchors inside example regions excluded.
pub fn extract_translations(doc: &Html) -> Vec<String> {
    let mut out = Collector::default();
    walk(doc.tree.root(), false, &mut out);
    out.accepted
}

/// Pre-order depth-first walk. The example flag is passed by value: a node
/// that escalates it affects only its own subtree, never its siblings.
fn walk(node: NodeRef<'_, Node>, mut in_example: bool, out: &mut Collector) {
    if let Some(el) = ElementRef::wrap(node) {
        let class = el.value().attr("class").unwrap_or("");
        if EXAMPLE_CLASS_HINTS.iter().any(|hint| class.contains(hint))
            || el.value().name() == "example"
        {
            in_example = true;
        }

        if !in_example && el.value().name() == "a" {
            let href = el.value().attr("href").unwrap_or("");
            if href.starts_with(TRANSLATION_HREF_PREFIX) {
                // Visible text: every descendant text node in document
                // order, element boundaries ignored.
                let text: String = el.text().collect();
                out.offer(&text);
            }
        }
    }

    for child in node.children() {
        walk(child, in_example, out);
    }
}
