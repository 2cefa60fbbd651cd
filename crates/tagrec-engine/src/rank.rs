//! Per-document ranking of candidate terms.

use std::{cmp::Ordering, collections::HashMap};

use serde::Serialize;

use crate::{
    Document, EngineError,
    score::{CorpusStats, inverse_document_frequency},
};

/// A distinct term of a document with its score components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    /// The normalized term.
    pub term: String,
    /// Occurrences of the term in the document.
    pub occurrences: usize,
    /// Term frequency within the document.
    pub tf: f64,
    /// Inverse document frequency across the corpus.
    pub idf: f64,
    /// `tf * idf`.
    pub score: f64,
}

/// Scores every distinct term of `document` and orders them by descending score.
///
/// Ties keep the order in which terms first occur in the document.
pub fn rank_document<S: CorpusStats + ?Sized>(
    document: &Document,
    stats: &S,
) -> Result<Vec<RankedTerm>, EngineError> {
    if document.is_empty() {
        return Err(EngineError::DegenerateDocument {
            record_id: document.record_id().to_string(),
        });
    }

    // Distinct terms in first-occurrence order, with their counts.
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in document.tokens() {
        let count = counts.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }

    let n = stats.document_count();
    let len = document.len() as f64;
    let mut ranked: Vec<RankedTerm> = order
        .into_iter()
        .map(|term| {
            let occurrences = counts.get(term).copied().unwrap_or(0);
            let tf = occurrences as f64 / len;
            let idf = inverse_document_frequency(n, stats.document_frequency(term));
            RankedTerm {
                term: term.to_string(),
                occurrences,
                tf,
                idf,
                score: tf * idf,
            }
        })
        .collect();

    // `sort_by` is stable, which preserves first-occurrence order among ties.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(ranked)
}
