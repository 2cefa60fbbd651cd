//! Suggestion lists and their tabular export.

use std::io::Write;

use serde::Serialize;
use tagrec_config::ExportLayout;

use crate::{EngineError, rank::RankedTerm};

/// A suggested tag and its unrounded score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// The suggested term.
    pub term: String,
    /// TF-IDF score.
    pub score: f64,
}

/// The top suggestions for one record, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionList {
    /// Identity of the record.
    pub record_id: String,
    /// Suggestions in ranked order.
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionList {
    /// Keeps at most `top_n` ranked terms.
    pub fn new(record_id: impl Into<String>, ranked: Vec<RankedTerm>, top_n: usize) -> Self {
        Self {
            record_id: record_id.into(),
            suggestions: ranked
                .into_iter()
                .take(top_n)
                .map(|r| Suggestion {
                    term: r.term,
                    score: r.score,
                })
                .collect(),
        }
    }

    /// Returns the suggested terms in order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.suggestions.iter().map(|s| s.term.as_str())
    }

    /// Returns a copy with every score rounded to `precision` decimal places.
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            record_id: self.record_id.clone(),
            suggestions: self
                .suggestions
                .iter()
                .map(|s| Suggestion {
                    term: s.term.clone(),
                    score: round_score(s.score, precision),
                })
                .collect(),
        }
    }
}

/// Rounds a score to `precision` decimal places for display.
///
/// Small negative scores that round away to nothing come back as `0.0`, not `-0.0`.
pub fn round_score(score: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    let rounded = (score * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Writes suggestion lists as CSV with columns `record_id,suggested_tag,tfidf_score`.
///
/// The grouped layout writes one heading row per record, with blank tag and
/// score, followed by its tag rows with a blank id. The flat layout repeats
/// the id on every tag row. Returns the number of tag rows written.
pub fn write_csv<W: Write>(
    writer: W,
    lists: &[SuggestionList],
    layout: ExportLayout,
    precision: u32,
) -> Result<usize, EngineError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["record_id", "suggested_tag", "tfidf_score"])?;

    let mut rows = 0;
    for list in lists {
        if layout == ExportLayout::Grouped {
            writer.write_record([list.record_id.as_str(), "", ""])?;
        }
        for suggestion in &list.suggestions {
            let id = match layout {
                ExportLayout::Grouped => "",
                ExportLayout::Flat => list.record_id.as_str(),
            };
            let score = round_score(suggestion.score, precision).to_string();
            writer.write_record([id, suggestion.term.as_str(), score.as_str()])?;
            rows += 1;
        }
    }
    writer.flush()?;

    Ok(rows)
}

#[cfg(test)]
mod test {
    use super::*;

    fn list(id: &str, entries: &[(&str, f64)]) -> SuggestionList {
        SuggestionList {
            record_id: id.to_string(),
            suggestions: entries
                .iter()
                .map(|(term, score)| Suggestion {
                    term: term.to_string(),
                    score: *score,
                })
                .collect(),
        }
    }

    fn ranked(term: &str, score: f64) -> RankedTerm {
        RankedTerm {
            term: term.to_string(),
            occurrences: 1,
            tf: 1.0,
            idf: score,
            score,
        }
    }

    #[test]
    fn truncates_to_top_n() {
        let l = SuggestionList::new(
            "a",
            vec![ranked("x", 0.3), ranked("y", 0.2), ranked("z", 0.1)],
            2,
        );
        assert_eq!(l.terms().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(SuggestionList::new("a", Vec::new(), 5).suggestions.len(), 0);
    }

    #[test]
    fn rounding_is_for_display_only() {
        assert_eq!(round_score(0.123456789, 5), 0.12346);
        assert_eq!(round_score(-0.287682, 3), -0.288);
        assert_eq!(round_score(2.5, 0), 3.0);
    }

    #[test]
    fn negative_scores_rounding_to_zero_lose_their_sign() {
        let rounded = round_score(-0.000001, 5);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());

        let mut out = Vec::new();
        write_csv(&mut out, &[list("a", &[("data", -0.000001)])], ExportLayout::Flat, 5).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "record_id,suggested_tag,tfidf_score\na,data,0\n"
        );
    }

    #[test]
    fn rounded_copy_keeps_order() {
        let l = list("a", &[("sea", 0.2027326), ("ice", -0.1438410)]).rounded(2);
        assert_eq!(l.terms().collect::<Vec<_>>(), vec!["sea", "ice"]);
        assert_eq!(l.suggestions[0].score, 0.2);
        assert_eq!(l.suggestions[1].score, -0.14);
    }

    #[test]
    fn grouped_layout() {
        let mut out = Vec::new();
        let rows = write_csv(
            &mut out,
            &[list("a", &[("temperature", 0.1234567), ("readings", 0.05)]), list("b", &[])],
            ExportLayout::Grouped,
            5,
        )
        .unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "record_id,suggested_tag,tfidf_score\n\
             a,,\n\
             ,temperature,0.12346\n\
             ,readings,0.05\n\
             b,,\n"
        );
    }

    #[test]
    fn flat_layout() {
        let mut out = Vec::new();
        write_csv(
            &mut out,
            &[list("a", &[("cloud", 0.0)])],
            ExportLayout::Flat,
            5,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "record_id,suggested_tag,tfidf_score\na,cloud,0\n"
        );
    }
}
