//! Catalog records and JSON ingestion.
//!
//! Records arrive either as a JSON array or as a catalog object holding the
//! array under `dataset`. Each entry is validated on its own, so one bad entry
//! is skipped and counted instead of aborting the whole corpus.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{EngineError, SkippedRecord};

/// A metadata record harvested from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Opaque identity of the record.
    pub id: String,
    /// Record title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Keywords declared by the cataloger.
    pub keyword: Vec<String>,
}

impl Record {
    /// Creates a record from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        keyword: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            keyword,
        }
    }
}

/// A record as it appears on the wire, with every field optional.
#[derive(Debug, Deserialize)]
struct RawRecord {
    /// Record identity (`identifier` in catalog feeds).
    #[serde(alias = "identifier")]
    id: Option<String>,
    /// Record title.
    title: Option<String>,
    /// Record description.
    description: Option<String>,
    /// Keyword list (`keywords` in document-store exports).
    #[serde(alias = "keywords")]
    keyword: Option<Vec<String>>,
}

impl RawRecord {
    /// Converts into a `Record`, naming the first missing field on failure.
    fn into_record(self, position: usize) -> Result<Record, SkippedRecord> {
        let record_id = self.id.clone();
        let missing = |field: &str| SkippedRecord {
            position: Some(position),
            record_id: record_id.clone(),
            error: EngineError::MalformedRecord {
                detail: format!("missing field `{field}`"),
            },
        };

        let id = self.id.clone().ok_or_else(|| missing("id"))?;
        let title = self.title.ok_or_else(|| missing("title"))?;
        let description = self.description.ok_or_else(|| missing("description"))?;
        let keyword = self.keyword.ok_or_else(|| missing("keyword"))?;

        Ok(Record {
            id,
            title,
            description,
            keyword,
        })
    }
}

/// Records read from an input, plus the entries that could not be used.
#[derive(Debug, Default)]
pub struct Ingested {
    /// Well-formed records in input order.
    pub records: Vec<Record>,
    /// Entries skipped as malformed.
    pub malformed: Vec<SkippedRecord>,
}

/// Parses records from a JSON string.
///
/// `max_records` keeps only the first N entries of the input, counted before
/// validation.
pub fn parse_records(json: &str, max_records: Option<usize>) -> Result<Ingested, EngineError> {
    let value: Value = serde_json::from_str(json)?;
    ingest_value(value, max_records)
}

/// Reads and parses records from a reader.
pub fn read_records<R: Read>(reader: R, max_records: Option<usize>) -> Result<Ingested, EngineError> {
    let value: Value = serde_json::from_reader(reader)?;
    ingest_value(value, max_records)
}

/// Validates every entry of an already parsed JSON document.
fn ingest_value(value: Value, max_records: Option<usize>) -> Result<Ingested, EngineError> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut catalog) => match catalog.remove("dataset") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(EngineError::UnexpectedShape),
        },
        _ => return Err(EngineError::UnexpectedShape),
    };

    let limit = max_records.unwrap_or(usize::MAX);
    let mut ingested = Ingested::default();

    for (position, entry) in entries.into_iter().take(limit).enumerate() {
        let raw: RawRecord = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(e) => {
                ingested.malformed.push(SkippedRecord {
                    position: Some(position),
                    record_id: None,
                    error: EngineError::MalformedRecord {
                        detail: e.to_string(),
                    },
                });
                continue;
            }
        };

        match raw.into_record(position) {
            Ok(record) => ingested.records.push(record),
            Err(skipped) => ingested.malformed.push(skipped),
        }
    }

    debug!(
        records = ingested.records.len(),
        malformed = ingested.malformed.len(),
        "ingested records"
    );

    Ok(ingested)
}
