//! Record tokenization and normalization.
//!
//! A record's title, description and keywords are joined with single spaces
//! and split on whitespace. A token survives only when it is made entirely of
//! alphabetic characters; tokens carrying digits or punctuation are dropped
//! whole rather than partially cleaned. Survivors are lowercased so mixed-case
//! input does not fragment corpus statistics.

use tagrec_config::{PunctuationPolicy, TokenizerSettings};

use crate::{Document, Record, Stopwords};

/// Turns record text into normalized tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// How punctuation attached to a word is handled.
    policy: PunctuationPolicy,
    /// Words removed after normalization.
    stopwords: Stopwords,
    /// Minimum token length in characters.
    min_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(PunctuationPolicy::Drop, Stopwords::none(), 1)
    }
}

impl Tokenizer {
    /// Creates a tokenizer.
    pub fn new(policy: PunctuationPolicy, stopwords: Stopwords, min_length: usize) -> Self {
        Self {
            policy,
            stopwords,
            min_length,
        }
    }

    /// Creates a tokenizer from configuration.
    pub fn from_settings(settings: &TokenizerSettings, stopwords: Stopwords) -> Self {
        Self::new(settings.punctuation, stopwords, settings.min_word_length)
    }

    /// Normalizes a single whitespace-delimited word.
    ///
    /// Returns `None` when the word is not alphabetic under the punctuation
    /// policy. Stop words and the length limit are not applied here, so the
    /// result can be compared against declared keywords.
    pub fn normalize(&self, word: &str) -> Option<String> {
        let word = match self.policy {
            PunctuationPolicy::Drop => word,
            PunctuationPolicy::Strip => word.trim_matches(|c: char| c.is_ascii_punctuation()),
        };
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return None;
        }
        Some(word.to_lowercase())
    }

    /// Splits text into normalized tokens, dropping stop words and short tokens.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|word| self.normalize(word))
            .filter(|token| token.chars().count() >= self.min_length)
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }

    /// Builds the document for a record.
    pub fn document(&self, record: &Record) -> Document {
        Document::new(record.id.clone(), self.tokens(&record_text(record)))
    }
}

/// Joins a record's title, description and keywords with single spaces.
pub fn record_text(record: &Record) -> String {
    let mut text = String::with_capacity(
        record.title.len() + record.description.len() + record.keyword.len() * 8,
    );
    text.push_str(&record.title);
    text.push(' ');
    text.push_str(&record.description);
    text.push(' ');
    text.push_str(&record.keyword.join(" "));
    text
}
