//! Error types for the tag recommendation engine.

use std::{fmt, io};

use thiserror::Error;

/// Errors raised while ingesting, scoring, or exporting records.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A record is missing a required field or is not a JSON object.
    #[error("malformed record: {detail}")]
    MalformedRecord {
        /// What was wrong with the record.
        detail: String,
    },

    /// A record normalizes to zero tokens, so term frequency is undefined.
    #[error("record {record_id} has no usable tokens")]
    DegenerateDocument {
        /// Identity of the record.
        record_id: String,
    },

    /// No usable documents remain to build a corpus from.
    #[error("corpus is empty: no record produced any usable tokens")]
    EmptyCorpus,

    /// The input is valid JSON but not a list of records.
    #[error("expected a JSON array of records or an object with a \"dataset\" array")]
    UnexpectedShape,

    /// A required column is absent from a CSV header.
    #[error("missing column '{0}' in CSV header")]
    MissingColumn(&'static str),

    /// Failed to read input or write output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse JSON input.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read or write CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A record that was left out of a run, with the reason.
#[derive(Debug)]
pub struct SkippedRecord {
    /// Position of the record in the input, when known.
    pub position: Option<usize>,
    /// Identity of the record, when it could be read.
    pub record_id: Option<String>,
    /// Why the record was skipped.
    pub error: EngineError,
}

impl SkippedRecord {
    /// Returns true if the record was skipped for having no usable tokens.
    pub fn is_degenerate(&self) -> bool {
        matches!(self.error, EngineError::DegenerateDocument { .. })
    }
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.record_id, self.position) {
            (Some(id), _) => write!(f, "record {id}: {}", self.error),
            (None, Some(position)) => write!(f, "record #{position}: {}", self.error),
            (None, None) => write!(f, "record: {}", self.error),
        }
    }
}
