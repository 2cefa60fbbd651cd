//! Removal of terms a record already declares.

use std::collections::HashSet;

use crate::{Record, Tokenizer, rank::RankedTerm};

/// The normalized title and keyword tokens of one record.
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    /// Tokens that must not be suggested.
    existing: HashSet<String>,
}

impl KeywordFilter {
    /// Collects the title and keyword tokens of a record.
    pub fn for_record(record: &Record, tokenizer: &Tokenizer) -> Self {
        let mut filter = Self::from_text(&record.title, tokenizer);
        for keyword in &record.keyword {
            filter.add_text(keyword, tokenizer);
        }
        filter
    }

    /// Collects the normalized tokens of arbitrary text.
    pub fn from_text(text: &str, tokenizer: &Tokenizer) -> Self {
        let mut filter = Self::default();
        filter.add_text(text, tokenizer);
        filter
    }

    /// Adds the normalized tokens of `text`.
    fn add_text(&mut self, text: &str, tokenizer: &Tokenizer) {
        self.existing
            .extend(text.split_whitespace().filter_map(|w| tokenizer.normalize(w)));
    }

    /// Returns true if `term` is already declared.
    pub fn contains(&self, term: &str) -> bool {
        self.existing.contains(term)
    }

    /// Drops declared terms, preserving the order of the rest.
    pub fn apply(&self, ranked: Vec<RankedTerm>) -> Vec<RankedTerm> {
        ranked
            .into_iter()
            .filter(|entry| !self.contains(&entry.term))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(term: &str, score: f64) -> RankedTerm {
        RankedTerm {
            term: term.to_string(),
            occurrences: 1,
            tf: 1.0,
            idf: score,
            score,
        }
    }

    #[test]
    fn removes_title_and_keyword_tokens() {
        let record = Record::new(
            "a",
            "Ocean Buoy Data",
            "temperature readings ocean",
            vec!["sea surface".into(), "Wind".into()],
        );
        let filter = KeywordFilter::for_record(&record, &Tokenizer::default());

        for term in ["ocean", "buoy", "data", "sea", "surface", "wind"] {
            assert!(filter.contains(term), "{term} should be filtered");
        }
        assert!(!filter.contains("temperature"));
        assert!(!filter.contains("readings"));
    }

    #[test]
    fn apply_preserves_order() {
        let filter = KeywordFilter::from_text("ocean", &Tokenizer::default());
        let ranked = vec![
            entry("temperature", 0.5),
            entry("ocean", 0.4),
            entry("readings", 0.3),
            entry("cover", 0.3),
        ];

        let kept: Vec<_> = filter
            .apply(ranked)
            .into_iter()
            .map(|e| e.term)
            .collect();
        assert_eq!(kept, vec!["temperature", "readings", "cover"]);
    }

    #[test]
    fn empty_record_filters_nothing() {
        let record = Record::new("a", "", "ocean", Vec::new());
        let filter = KeywordFilter::for_record(&record, &Tokenizer::default());
        assert_eq!(filter.apply(vec![entry("ocean", 1.0)]).len(), 1);
    }
}
