//! The end-to-end scoring run.
//!
//! Documents are tokenized in parallel, the corpus is built once, and every
//! document is then ranked in parallel against the shared read-only corpus.
//! Parallel results are collected in input order, so output does not depend
//! on scheduling.

use rayon::prelude::*;
use tagrec_config::Config;
use tracing::{debug, warn};

use crate::{
    Corpus, EngineError, Record, SkippedRecord, Stopwords, Tokenizer,
    export::SuggestionList,
    filter::KeywordFilter,
    rank::rank_document,
};

/// Outcome of a scoring run.
#[derive(Debug)]
pub struct RunReport {
    /// Number of documents in the corpus.
    pub corpus_size: usize,
    /// Number of distinct terms in the corpus.
    pub vocabulary_size: usize,
    /// Suggestions per scored record, in input order.
    pub suggestions: Vec<SuggestionList>,
    /// Records excluded from the corpus.
    pub skipped: Vec<SkippedRecord>,
}

/// A corpus together with the records it was built from.
#[derive(Debug)]
pub struct BuiltCorpus<'a> {
    /// The corpus over all usable records.
    pub corpus: Corpus,
    /// Records backing each corpus document, index for index.
    pub records: Vec<&'a Record>,
    /// Records with no usable tokens.
    pub skipped: Vec<SkippedRecord>,
}

/// Tokenizes, scores, ranks and filters records.
#[derive(Debug, Clone, Default)]
pub struct TagEngine {
    /// Tokenizer applied to every record.
    tokenizer: Tokenizer,
    /// Whether declared title and keyword terms are removed from suggestions.
    filter_existing: bool,
}

impl TagEngine {
    /// Creates an engine.
    pub fn new(tokenizer: Tokenizer, filter_existing: bool) -> Self {
        Self {
            tokenizer,
            filter_existing,
        }
    }

    /// Creates an engine from configuration.
    pub fn from_config(config: &Config) -> Self {
        let stopwords = Stopwords::from_settings(&config.stopwords);
        let tokenizer = Tokenizer::from_settings(&config.tokenizer, stopwords);
        Self::new(tokenizer, config.suggest.filter_existing)
    }

    /// Returns the engine's tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Builds the corpus, leaving out records without usable tokens.
    pub fn build_corpus<'a>(&self, records: &'a [Record]) -> Result<BuiltCorpus<'a>, EngineError> {
        let documents: Vec<_> = records
            .par_iter()
            .map(|record| self.tokenizer.document(record))
            .collect();

        let mut kept_documents = Vec::with_capacity(documents.len());
        let mut kept_records = Vec::with_capacity(documents.len());
        let mut skipped = Vec::new();

        for (position, (record, document)) in records.iter().zip(documents).enumerate() {
            if document.is_empty() {
                let skip = SkippedRecord {
                    position: Some(position),
                    record_id: Some(record.id.clone()),
                    error: EngineError::DegenerateDocument {
                        record_id: record.id.clone(),
                    },
                };
                warn!(record = %record.id, "skipping record with no usable tokens");
                skipped.push(skip);
                continue;
            }
            kept_documents.push(document);
            kept_records.push(record);
        }

        let corpus = Corpus::build(kept_documents)?;
        debug!(
            documents = corpus.len(),
            vocabulary = corpus.vocabulary_size(),
            skipped = skipped.len(),
            "corpus ready"
        );

        Ok(BuiltCorpus {
            corpus,
            records: kept_records,
            skipped,
        })
    }

    /// Produces at most `top_n` suggestions for every usable record.
    pub fn run(&self, records: &[Record], top_n: usize) -> Result<RunReport, EngineError> {
        let built = self.build_corpus(records)?;
        let corpus = &built.corpus;

        let suggestions = corpus
            .documents()
            .par_iter()
            .zip(built.records.par_iter())
            .map(|(document, record)| -> Result<SuggestionList, EngineError> {
                let mut ranked = rank_document(document, corpus)?;
                if self.filter_existing {
                    ranked = KeywordFilter::for_record(record, &self.tokenizer).apply(ranked);
                }
                Ok(SuggestionList::new(record.id.clone(), ranked, top_n))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RunReport {
            corpus_size: corpus.len(),
            vocabulary_size: corpus.vocabulary_size(),
            suggestions,
            skipped: built.skipped,
        })
    }
}
