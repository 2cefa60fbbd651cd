//! Discovery of catalog-specific stop words.
//!
//! Words such as agency names appear among the most frequent tokens of nearly
//! every record. They carry no information for tagging and are good
//! candidates for the `[stopwords] extra` list.

use std::{
    cmp::{Ordering, Reverse},
    collections::HashMap,
};

use serde::Serialize;

use crate::{Corpus, Document};

/// A term that is frequent in a large share of documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopwordCandidate {
    /// The normalized term.
    pub term: String,
    /// Fraction of documents listing the term among their most frequent tokens.
    pub share: f64,
    /// Percentage of documents containing the term at all.
    pub presence: f64,
}

/// Finds terms that rank among the `per_record` most frequent tokens of at
/// least `min_share` of the documents.
///
/// Results are ordered by share descending, then alphabetically.
pub fn discover_stopwords(corpus: &Corpus, per_record: usize, min_share: f64) -> Vec<StopwordCandidate> {
    let mut listed: HashMap<&str, usize> = HashMap::new();
    for document in corpus.documents() {
        for term in most_common(document, per_record) {
            *listed.entry(term).or_insert(0) += 1;
        }
    }

    let n = corpus.len() as f64;
    let mut candidates: Vec<StopwordCandidate> = listed
        .into_iter()
        .map(|(term, count)| StopwordCandidate {
            term: term.to_string(),
            share: count as f64 / n,
            presence: corpus.presence(term),
        })
        .filter(|c| c.share >= min_share)
        .collect();

    candidates.sort_by(|a, b| {
        b.share
            .partial_cmp(&a.share)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    candidates
}

/// Returns up to `limit` distinct terms of a document by descending count.
///
/// Ties keep first-occurrence order.
fn most_common(document: &Document, limit: usize) -> Vec<&str> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in document.tokens() {
        let count = counts.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }

    order.sort_by_key(|term| Reverse(counts.get(term).copied().unwrap_or(0)));
    order.truncate(limit);
    order
}

#[cfg(test)]
mod test {
    use super::*;

    fn doc(id: &str, text: &str) -> Document {
        Document::new(id, text.split_whitespace().map(str::to_string).collect())
    }

    #[test]
    fn most_common_orders_by_count_then_first_occurrence() {
        let d = doc("a", "buoy noaa ocean noaa ocean wind");
        assert_eq!(most_common(&d, 3), vec!["noaa", "ocean", "buoy"]);
        assert_eq!(most_common(&d, 10).len(), 4);
    }

    #[test]
    fn finds_terms_common_across_records() {
        let corpus = Corpus::build(vec![
            doc("a", "noaa noaa commerce buoy"),
            doc("b", "noaa commerce commerce satellite"),
            doc("c", "noaa wind"),
            doc("d", "cloud cover"),
        ])
        .unwrap();

        let found = discover_stopwords(&corpus, 2, 0.5);
        let terms: Vec<_> = found.iter().map(|c| c.term.as_str()).collect();

        assert_eq!(terms, vec!["noaa", "commerce"]);
        assert_eq!(found[0].share, 0.75);
        assert_eq!(found[0].presence, 75.0);
        assert_eq!(found[1].share, 0.5);
    }

    #[test]
    fn equal_shares_sort_alphabetically() {
        let corpus = Corpus::build(vec![doc("a", "zeta alpha"), doc("b", "zeta alpha")]).unwrap();
        let terms: Vec<_> = discover_stopwords(&corpus, 5, 1.0)
            .into_iter()
            .map(|c| c.term)
            .collect();
        assert_eq!(terms, vec!["alpha", "zeta"]);
    }

    #[test]
    fn high_threshold_finds_nothing() {
        let corpus = Corpus::build(vec![doc("a", "ocean"), doc("b", "cloud")]).unwrap();
        assert!(discover_stopwords(&corpus, 10, 0.9).is_empty());
    }
}
