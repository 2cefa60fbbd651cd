//! Corpus TF-IDF tag recommendation for catalog metadata records.
//!
//! Records are tokenized into documents, a corpus of document frequencies is
//! built once per run, and each document's distinct terms are ranked by
//! `tf * ln(N / (1 + df))`. Terms a record already declares in its title or
//! keywords are removed so the remaining suggestions are novel tags.
//!
//! ```no_run
//! use tagrec_engine::{TagEngine, parse_records};
//!
//! let ingested = parse_records(r#"[{"id": "a", "title": "t", "description": "d", "keyword": []}]"#, None)?;
//! let report = TagEngine::default().run(&ingested.records, 3)?;
//! for list in &report.suggestions {
//!     println!("{}: {:?}", list.record_id, list.terms().collect::<Vec<_>>());
//! }
//! # Ok::<(), tagrec_engine::EngineError>(())
//! ```

mod candidates;
mod corpus;
mod discover;
mod error;
mod export;
mod filter;
mod pipeline;
mod rank;
mod record;
pub mod score;
mod stopwords;
mod tokenize;

pub use candidates::{filter_candidates, novel_keywords};
pub use corpus::{Corpus, Document};
pub use discover::{StopwordCandidate, discover_stopwords};
pub use error::{EngineError, SkippedRecord};
pub use export::{Suggestion, SuggestionList, round_score, write_csv};
pub use filter::KeywordFilter;
pub use pipeline::{BuiltCorpus, RunReport, TagEngine};
pub use rank::{RankedTerm, rank_document};
pub use record::{Ingested, Record, parse_records, read_records};
pub use score::CorpusStats;
pub use stopwords::Stopwords;
pub use tokenize::{Tokenizer, record_text};
