//! Search-relevance ranking for notes.
//!
//! The `/search` endpoint ranks notes by a term-frequency score over the
//! concatenation of title and content: tokenize both the query and the
//! document into lowercase words, then count how many document tokens match
//! a query term. The score is monotonic in term overlap and deterministic
//! for identical inputs; sorting is stable, so ties keep insertion order.
//!
//! The implementation is intentionally simple, using only basic string
//! operations and hash sets rather than external NLP libraries.

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizes text into lowercase word tokens.
///
/// Uses Unicode word boundaries, so punctuation is dropped and hyphenated
/// or accented words split the same way for queries and documents.
fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

/// Tokenizes a search query into its terms.
///
/// Returns an empty vector for whitespace-only input.
pub fn query_terms(query: &str) -> Vec<String> {
    tokenize(query)
}

/// Scores a document against a set of query terms.
///
/// The score is the number of document tokens that exactly match any query
/// term, case-insensitively. A document sharing no token with the query
/// scores zero.
pub fn relevance_score(terms: &[String], text: &str) -> usize {
    if terms.is_empty() {
        return 0;
    }
    let term_set: HashSet<&str> = terms.iter().map(String::as_str).collect();
    tokenize(text)
        .iter()
        .filter(|token| term_set.contains(token.as_str()))
        .count()
}

/// Sorts items descending by relevance score, preserving input order on ties.
///
/// `text_of` extracts the searchable text of an item (for notes, title and
/// content concatenated).
pub fn rank_by_relevance<T, F>(items: Vec<T>, terms: &[String], text_of: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut scored: Vec<(usize, T)> = items
        .into_iter()
        .map(|item| (relevance_score(terms, &text_of(&item)), item))
        .collect();
    // Stable sort: equal scores keep insertion order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(q: &str) -> Vec<String> {
        query_terms(q)
    }

    #[test]
    fn test_query_terms_splits_and_lowercases() {
        assert_eq!(terms("Billy Smith"), vec!["billy", "smith"]);
        assert_eq!(terms("  hello,  WORLD! "), vec!["hello", "world"]);
    }

    #[test]
    fn test_query_terms_empty() {
        assert!(terms("").is_empty());
        assert!(terms("   ").is_empty());
    }

    #[test]
    fn test_relevance_score_counts_matches() {
        let t = terms("billy smith");
        assert_eq!(relevance_score(&t, "Billy Smith"), 2);
        assert_eq!(relevance_score(&t, "Billy Smith and billy again"), 3);
        assert_eq!(relevance_score(&t, "nothing relevant"), 0);
    }

    #[test]
    fn test_relevance_score_case_insensitive() {
        let t = terms("HELLO");
        assert_eq!(relevance_score(&t, "hello Hello HELLO"), 3);
    }

    #[test]
    fn test_relevance_score_monotonic_in_overlap() {
        let t = terms("alpha beta");
        let one = relevance_score(&t, "alpha only here");
        let two = relevance_score(&t, "alpha and beta here");
        assert!(two > one);
        assert!(one > 0);
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let t = terms("alpha beta");
        let items = vec!["gamma", "alpha beta", "alpha"];
        let ranked = rank_by_relevance(items, &t, |s| (*s).to_string());
        assert_eq!(ranked, vec!["alpha beta", "alpha", "gamma"]);
    }

    #[test]
    fn test_rank_ties_preserve_insertion_order() {
        let t = terms("alpha");
        let items = vec!["alpha first", "alpha second", "alpha third"];
        let ranked = rank_by_relevance(items.clone(), &t, |s| (*s).to_string());
        assert_eq!(ranked, items);
    }

    #[test]
    fn test_rank_deterministic() {
        let t = terms("note");
        let items = vec!["a note", "note note", "no match", "another note"];
        let first = rank_by_relevance(items.clone(), &t, |s| (*s).to_string());
        let second = rank_by_relevance(items, &t, |s| (*s).to_string());
        assert_eq!(first, second);
    }
}
