//! Stop-word filtering for record tokens.
//!
//! Combines the English list from the `stop-words` crate (Stopwords ISO) with
//! domain words supplied through configuration, such as agency names that
//! appear in nearly every record of a catalog.

use std::collections::HashSet;

use stop_words::LANGUAGE;
use tagrec_config::{StopwordLanguage, StopwordSettings};

/// A case-insensitive stop-word set.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    /// Lowercased stop words.
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates an empty set that filters nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a set holding the English stop words.
    pub fn english() -> Self {
        let mut stopwords = Self::none();
        stopwords.extend(stop_words::get(LANGUAGE::English).iter().copied());
        stopwords
    }

    /// Builds the set described by configuration.
    pub fn from_settings(settings: &StopwordSettings) -> Self {
        let mut stopwords = match settings.language {
            StopwordLanguage::English => Self::english(),
            StopwordLanguage::None => Self::none(),
        };
        stopwords.extend(settings.extra.iter().map(String::as_str));
        stopwords
    }

    /// Adds words to the set.
    pub fn extend<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for word in words {
            let word = word.trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Checks if a term is a stop word, ignoring case.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the total number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stop words are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_english_stopwords() {
        let sw = Stopwords::english();
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert!(sw.contains("of"));
        assert!(sw.contains("THE"));
    }

    #[test]
    fn domain_terms_are_not_english_stopwords() {
        let sw = Stopwords::english();
        assert!(!sw.contains("buoy"));
        assert!(!sw.contains("satellite"));
        assert!(!sw.contains("temperature"));
    }

    #[test]
    fn none_filters_nothing() {
        let sw = Stopwords::none();
        assert!(sw.is_empty());
        assert!(!sw.contains("the"));
    }

    #[test]
    fn settings_add_extra_words() {
        let settings = StopwordSettings {
            language: StopwordLanguage::None,
            extra: vec!["NOAA".into(), " commerce ".into(), String::new()],
        };
        let sw = Stopwords::from_settings(&settings);

        assert_eq!(sw.len(), 2);
        assert!(sw.contains("noaa"));
        assert!(sw.contains("Commerce"));
        assert!(!sw.contains("the"));
    }

    #[test]
    fn settings_combine_language_and_extra() {
        let settings = StopwordSettings {
            language: StopwordLanguage::English,
            extra: vec!["noaa".into()],
        };
        let sw = Stopwords::from_settings(&settings);

        assert!(sw.contains("the"));
        assert!(sw.contains("noaa"));
        assert!(sw.len() > 100);
    }
}
