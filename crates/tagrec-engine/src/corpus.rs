//! Documents and corpus-wide statistics.
//!
//! The corpus is built once per run in a single pass over every token and is
//! read-only afterwards, so ranking threads can share it by reference.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{EngineError, score::CorpusStats};

/// The normalized token sequence derived from one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identity of the record this document came from.
    record_id: String,
    /// Tokens in record order.
    tokens: Vec<String>,
}

impl Document {
    /// Creates a document from already normalized tokens.
    pub fn new(record_id: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            record_id: record_id.into(),
            tokens,
        }
    }

    /// Returns the identity of the originating record.
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Returns the tokens in record order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Counts occurrences of a term.
    pub fn count(&self, term: &str) -> usize {
        self.tokens.iter().filter(|t| *t == term).count()
    }
}

/// All documents of one scoring run and their document frequencies.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Documents in input order.
    documents: Vec<Document>,
    /// Number of distinct documents containing each term.
    document_frequency: HashMap<String, usize>,
}

impl Corpus {
    /// Builds a corpus over a fixed set of documents.
    ///
    /// Fails with `EmptyCorpus` when `documents` is empty.
    pub fn build(documents: Vec<Document>) -> Result<Self, EngineError> {
        if documents.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for document in &documents {
            let distinct: HashSet<&str> = document.tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        debug!(
            documents = documents.len(),
            vocabulary = document_frequency.len(),
            "built corpus"
        );

        Ok(Self {
            documents,
            document_frequency,
        })
    }

    /// Returns the documents in input order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Returns the number of documents, `N`.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false: an empty corpus cannot be built.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Returns the number of distinct terms across all documents.
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }

    /// Returns the percentage of documents containing a term.
    pub fn presence(&self, term: &str) -> f64 {
        CorpusStats::document_frequency(self, term) as f64 / self.len() as f64 * 100.0
    }
}

impl CorpusStats for Corpus {
    fn document_count(&self) -> usize {
        self.documents.len()
    }

    fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }
}
