//! tagrec: catalog tag recommendation
//!
//! Suggests novel tags for catalog metadata records. Every record's words are
//! scored by TF-IDF against the whole corpus of records, and the best scoring
//! words the record does not already declare are offered as tags, either
//! interactively or as a CSV table for bulk import.

pub mod cli;
