//! TF-IDF scoring.
//!
//! Term frequency is the share of a document's tokens equal to the term.
//! Inverse document frequency is `ln(N / (1 + df))`. The smoothing term makes
//! IDF negative for terms present in more than `N/e - 1` documents; those
//! negative values are kept as is so common terms sink below rare ones.

use crate::{Document, EngineError};

/// Corpus-level statistics needed to compute inverse document frequency.
pub trait CorpusStats {
    /// Returns the number of documents, `N`.
    fn document_count(&self) -> usize;

    /// Returns the number of documents containing `term` at least once.
    fn document_frequency(&self, term: &str) -> usize;

    /// Returns the inverse document frequency of `term`.
    fn idf(&self, term: &str) -> f64 {
        inverse_document_frequency(self.document_count(), self.document_frequency(term))
    }
}

/// Computes `ln(n / (1 + df))`.
pub fn inverse_document_frequency(n: usize, df: usize) -> f64 {
    (n as f64 / (1.0 + df as f64)).ln()
}

/// Computes the frequency of `term` in `document`, normalized by length.
///
/// Fails with `DegenerateDocument` when the document has no tokens.
pub fn term_frequency(term: &str, document: &Document) -> Result<f64, EngineError> {
    if document.is_empty() {
        return Err(EngineError::DegenerateDocument {
            record_id: document.record_id().to_string(),
        });
    }
    Ok(document.count(term) as f64 / document.len() as f64)
}

/// Scores `term` within `document` against corpus statistics.
pub fn score<S: CorpusStats + ?Sized>(
    term: &str,
    document: &Document,
    stats: &S,
) -> Result<f64, EngineError> {
    Ok(term_frequency(term, document)? * stats.idf(term))
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    /// Fixed statistics for exercising the formulas directly.
    struct FixedStats {
        /// Number of documents.
        n: usize,
        /// Document frequency per term.
        df: HashMap<&'static str, usize>,
    }

    impl CorpusStats for FixedStats {
        fn document_count(&self) -> usize {
            self.n
        }

        fn document_frequency(&self, term: &str) -> usize {
            self.df.get(term).copied().unwrap_or(0)
        }
    }

    fn doc(text: &str) -> Document {
        Document::new("d", text.split_whitespace().map(str::to_string).collect())
    }

    #[test]
    fn repeated_single_token_has_full_frequency() {
        let d = doc("noaa noaa noaa");
        assert_eq!(term_frequency("noaa", &d).unwrap(), 1.0);
    }

    #[test]
    fn term_frequency_is_normalized_by_length() {
        let d = doc("ocean buoy ocean temperature");
        assert_eq!(term_frequency("ocean", &d).unwrap(), 0.5);
        assert_eq!(term_frequency("buoy", &d).unwrap(), 0.25);
        assert_eq!(term_frequency("cloud", &d).unwrap(), 0.0);
    }

    #[test]
    fn empty_document_is_degenerate() {
        let d = Document::new("empty", Vec::new());
        let err = term_frequency("ocean", &d).unwrap_err();
        assert!(matches!(
            err,
            EngineError::DegenerateDocument { ref record_id } if record_id == "empty"
        ));
    }

    #[test]
    fn idf_uses_additive_smoothing() {
        assert!((inverse_document_frequency(10, 1) - 5f64.ln()).abs() < 1e-12);
        assert_eq!(inverse_document_frequency(2, 1), 0.0);
    }

    #[test]
    fn single_document_corpus_idf() {
        assert_eq!(inverse_document_frequency(1, 0), 0.0);
        assert!((inverse_document_frequency(1, 1) - 0.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn negative_idf_is_not_clamped() {
        let stats = FixedStats {
            n: 4,
            df: HashMap::from([("data", 4)]),
        };
        let d = doc("data ocean");

        let idf = stats.idf("data");
        assert!(idf < 0.0);
        assert!((idf - 0.8f64.ln()).abs() < 1e-12);
        assert!(score("data", &d, &stats).unwrap() < 0.0);
    }

    #[test]
    fn score_is_tf_times_idf() {
        let stats = FixedStats {
            n: 10,
            df: HashMap::from([("buoy", 1)]),
        };
        let d = doc("buoy ocean ocean ocean");

        let expected = 0.25 * 5f64.ln();
        assert!((score("buoy", &d, &stats).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn score_is_deterministic() {
        let stats = FixedStats {
            n: 7,
            df: HashMap::from([("ocean", 2)]),
        };
        let d = doc("ocean buoy ocean");
        let first = score("ocean", &d, &stats).unwrap();
        for _ in 0..10 {
            assert_eq!(score("ocean", &d, &stats).unwrap().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn more_occurrences_never_lower_the_score() {
        let stats = FixedStats {
            n: 10,
            df: HashMap::from([("buoy", 1)]),
        };
        let fewer = score("buoy", &doc("buoy ocean ocean ocean"), &stats).unwrap();
        let more = score("buoy", &doc("buoy buoy ocean ocean"), &stats).unwrap();
        assert!(more >= fewer);
    }
}
