//! Filtering of topic-model keyword candidates.
//!
//! A topic model run outside this crate proposes space separated keywords per
//! record. This module drops proposals that merely repeat words from the
//! record text and writes the survivors back out as CSV.

use std::{
    collections::HashSet,
    io::{Read, Write},
};

use tracing::debug;

use crate::{EngineError, Tokenizer, filter::KeywordFilter};

/// Accepted names of the record identity column.
const ID_COLUMNS: [&str; 2] = ["record_id", "record_index"];
/// Name of the record text column.
const TEXT_COLUMN: &str = "record_text";
/// Name of the candidate keyword column.
const KEYWORDS_COLUMN: &str = "suggested_keywords";

/// Filters candidate keywords read from `reader` and writes them to `writer`.
///
/// Returns the number of rows written.
pub fn filter_candidates<R: Read, W: Write>(
    reader: R,
    writer: W,
    tokenizer: &Tokenizer,
) -> Result<usize, EngineError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let id_col = ID_COLUMNS
        .into_iter()
        .find_map(&column)
        .ok_or(EngineError::MissingColumn("record_id"))?;
    let text_col = column(TEXT_COLUMN).ok_or(EngineError::MissingColumn(TEXT_COLUMN))?;
    let keywords_col =
        column(KEYWORDS_COLUMN).ok_or(EngineError::MissingColumn(KEYWORDS_COLUMN))?;

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["record_id", KEYWORDS_COLUMN])?;

    let mut rows = 0;
    for row in reader.records() {
        let row = row?;
        let id = row.get(id_col).unwrap_or_default();
        let text = row.get(text_col).unwrap_or_default();
        let candidates = row.get(keywords_col).unwrap_or_default();

        let kept = novel_keywords(text, candidates, tokenizer);
        writer.write_record([id, kept.join(" ").as_str()])?;
        rows += 1;
    }
    writer.flush()?;

    debug!(rows, "filtered candidate keywords");
    Ok(rows)
}

/// Returns candidates absent from `text`, deduplicated in first-occurrence order.
pub fn novel_keywords(text: &str, candidates: &str, tokenizer: &Tokenizer) -> Vec<String> {
    let existing = KeywordFilter::from_text(text, tokenizer);
    let mut seen = HashSet::new();
    candidates
        .split_whitespace()
        .filter_map(|word| tokenizer.normalize(word))
        .filter(|word| !existing.contains(word))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
