//! Case-insensitive substring filter over item name and description.
//!
//! # Invariants
//! - Query text is trimmed before matching; a blank query matches everything.
//! - Matching uses Unicode simple case folding, never locale rules.
//!   Characters with no simple fold, such as `İ` (U+0130), match only
//!   themselves.

use crate::model::item::Item;
use regex::{Regex, RegexBuilder};

/// Compiled form of one user query.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    needle: Needle,
}

#[derive(Debug, Clone)]
enum Needle {
    Blank,
    Pattern(Regex),
    // Used when the escaped query exceeds the regex size limit.
    Folded(String),
}

impl QueryMatcher {
    /// Compiles `query` for repeated matching.
    pub fn new(query: &str) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Self {
                needle: Needle::Blank,
            };
        }

        let needle = match RegexBuilder::new(&regex::escape(trimmed))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Needle::Pattern(pattern),
            Err(_) => Needle::Folded(fold_case(trimmed)),
        };
        Self { needle }
    }

    /// Returns whether the query places no restriction on items.
    pub fn is_blank(&self) -> bool {
        matches!(self.needle, Needle::Blank)
    }

    /// Returns whether `item` name or description contains the query.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_text(&item.name) || self.matches_text(&item.description)
    }

    fn matches_text(&self, text: &str) -> bool {
        match &self.needle {
            Needle::Blank => true,
            Needle::Pattern(pattern) => pattern.is_match(text),
            Needle::Folded(folded) => fold_case(text).contains(folded.as_str()),
        }
    }
}

// Per-char mapping; no context rules like final sigma.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns the items of `catalog` that match `query`, in catalog order.
///
/// A blank query returns the whole catalog unchanged.
pub fn filter_items(catalog: &[Item], query: &str) -> Vec<Item> {
    let matcher = QueryMatcher::new(query);
    if matcher.is_blank() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|item| matcher.matches(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_items, fold_case, QueryMatcher};
    use crate::model::item::Item;

    fn items() -> Vec<Item> {
        vec![
            Item::new(1, "Apple iPhone 15", "Latest model smartphone"),
            Item::new(2, "Kindle Paperwhite", "E-reader for books"),
            Item::new(3, "Café Grinder", "Burr mill (v2.0)"),
        ]
    }

    #[test]
    fn whitespace_query_is_blank() {
        assert!(QueryMatcher::new(" \t\n").is_blank());
        assert!(!QueryMatcher::new(" a ").is_blank());
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let hits = filter_items(&items(), "  IPHONE  ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn regex_metacharacters_match_literally() {
        let hits = filter_items(&items(), "(v2.0)");
        assert_eq!(hits.iter().map(|item| item.id).collect::<Vec<_>>(), vec![3]);
        assert!(filter_items(&items(), "v2x0").is_empty());
    }

    #[test]
    fn non_ascii_text_matches_case_insensitively() {
        let hits = filter_items(&items(), "CAFÉ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn description_only_match_is_kept() {
        let hits = filter_items(&items(), "books");
        assert_eq!(hits.iter().map(|item| item.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn very_long_query_still_filters() {
        let query = "x".repeat(200_000);
        assert!(filter_items(&items(), &query).is_empty());
    }

    #[test]
    fn fallback_folding_maps_each_char_alone() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("CAFÉ"), "café");
    }

    #[test]
    fn dotted_capital_i_matches_only_itself() {
        let catalog = vec![Item::new(4, "İstanbul Guide", "City map")];
        assert!(filter_items(&catalog, "istanbul").is_empty());
        assert_eq!(filter_items(&catalog, "İSTANBUL").len(), 1);
    }
}
