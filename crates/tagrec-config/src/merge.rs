//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying
//! precedence rules.

use crate::{
    Config, CorpusSettings, ExportSettings, OutputSettings, StopsSettings, StopwordSettings,
    SuggestSettings, TokenizerSettings,
    parse::{
        RawConfig, RawCorpusSettings, RawExportSettings, RawOutputSettings, RawStopsSettings,
        RawStopwordSettings, RawSuggestSettings, RawTokenizerSettings,
    },
};

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: the highest-precedence defined value wins
/// - Extra stop words: unioned across all files, in precedence order, without duplicates
pub fn merge_configs(configs: &[RawConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let mut config = Config::default();

    // Lowest precedence first so closer files overwrite.
    for raw in configs.iter().rev() {
        apply_raw_config(&mut config, raw);
    }

    config.stopwords.extra = merge_extra_stopwords(configs);

    config
}

/// Applies every section of one raw config onto the result.
fn apply_raw_config(result: &mut Config, raw: &RawConfig) {
    if let Some(ref corpus) = raw.corpus {
        apply_raw_corpus(&mut result.corpus, corpus);
    }
    if let Some(ref tokenizer) = raw.tokenizer {
        apply_raw_tokenizer(&mut result.tokenizer, tokenizer);
    }
    if let Some(ref stopwords) = raw.stopwords {
        apply_raw_stopwords(&mut result.stopwords, stopwords);
    }
    if let Some(ref suggest) = raw.suggest {
        apply_raw_suggest(&mut result.suggest, suggest);
    }
    if let Some(ref export) = raw.export {
        apply_raw_export(&mut result.export, export);
    }
    if let Some(ref output) = raw.output {
        apply_raw_output(&mut result.output, output);
    }
    if let Some(ref stops) = raw.stops {
        apply_raw_stops(&mut result.stops, stops);
    }
}

/// Applies raw corpus settings.
fn apply_raw_corpus(result: &mut CorpusSettings, raw: &RawCorpusSettings) {
    if let Some(v) = raw.max_records {
        result.max_records = Some(v);
    }
}

/// Applies raw tokenizer settings.
fn apply_raw_tokenizer(result: &mut TokenizerSettings, raw: &RawTokenizerSettings) {
    if let Some(v) = raw.punctuation {
        result.punctuation = v;
    }
    if let Some(v) = raw.min_word_length {
        result.min_word_length = v;
    }
}

/// Applies the raw stop-word language. Extra words are merged separately.
fn apply_raw_stopwords(result: &mut StopwordSettings, raw: &RawStopwordSettings) {
    if let Some(v) = raw.language {
        result.language = v;
    }
}

/// Applies raw suggestion settings.
fn apply_raw_suggest(result: &mut SuggestSettings, raw: &RawSuggestSettings) {
    if let Some(v) = raw.top_n {
        result.top_n = v;
    }
    if let Some(v) = raw.filter_existing {
        result.filter_existing = v;
    }
}

/// Applies raw export settings.
fn apply_raw_export(result: &mut ExportSettings, raw: &RawExportSettings) {
    if let Some(v) = raw.top_n {
        result.top_n = v;
    }
    if let Some(v) = raw.layout {
        result.layout = v;
    }
}

/// Applies raw output settings.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.precision {
        result.precision = v;
    }
}

/// Applies raw stop-word discovery settings.
fn apply_raw_stops(result: &mut StopsSettings, raw: &RawStopsSettings) {
    if let Some(v) = raw.per_record {
        result.per_record = v;
    }
    if let Some(v) = raw.min_share {
        result.min_share = v;
    }
}

/// Collects extra stop words from all files, highest precedence first.
fn merge_extra_stopwords(configs: &[RawConfig]) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for raw in configs {
        let Some(extra) = raw
            .stopwords
            .as_ref()
            .and_then(|s| s.extra.as_ref())
        else {
            continue;
        };
        for word in extra {
            let word = word.trim().to_lowercase();
            if !word.is_empty() && !words.contains(&word) {
                words.push(word);
            }
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{ExportLayout, PunctuationPolicy, StopwordLanguage, parse::parse_config_str};

    fn parsed(path: &str, toml: &str) -> RawConfig {
        parse_config_str(toml, Path::new(path)).unwrap()
    }

    #[test]
    fn test_merge_empty() {
        let config = merge_configs(&[]);
        assert_eq!(config.suggest.top_n, 3);
    }

    #[test]
    fn test_merge_single_overrides_defaults() {
        let config = merge_configs(&[parsed(
            "/project/.tagrec.toml",
            "[suggest]\ntop_n = 7\n[tokenizer]\npunctuation = \"strip\"\n",
        )]);

        assert_eq!(config.suggest.top_n, 7);
        assert!(config.suggest.filter_existing);
        assert_eq!(config.tokenizer.punctuation, PunctuationPolicy::Strip);
    }

    #[test]
    fn test_merge_closest_wins() {
        let local = parsed(
            "/project/.tagrec.toml",
            "[export]\ntop_n = 2\n[stopwords]\nlanguage = \"none\"\n",
        );
        let global = parsed(
            "/home/user/.tagrec.toml",
            "[export]\ntop_n = 9\nlayout = \"flat\"\n[stopwords]\nlanguage = \"english\"\n",
        );

        let config = merge_configs(&[local, global]);

        assert_eq!(config.export.top_n, 2);
        // Only the global file sets the layout, so it is inherited.
        assert_eq!(config.export.layout, ExportLayout::Flat);
        assert_eq!(config.stopwords.language, StopwordLanguage::None);
    }

    #[test]
    fn test_merge_unions_extra_stopwords() {
        let local = parsed(
            "/project/.tagrec.toml",
            "[stopwords]\nextra = [\"NOAA\", \"doc\"]\n",
        );
        let global = parsed(
            "/home/user/.tagrec.toml",
            "[stopwords]\nextra = [\"doc\", \"commerce\"]\n",
        );

        let config = merge_configs(&[local, global]);

        assert_eq!(config.stopwords.extra, vec!["noaa", "doc", "commerce"]);
    }

    #[test]
    fn test_merge_corpus_cap() {
        let config = merge_configs(&[parsed(
            "/project/.tagrec.toml",
            "[corpus]\nmax_records = 500\n",
        )]);
        assert_eq!(config.corpus.max_records, Some(500));
    }
}
