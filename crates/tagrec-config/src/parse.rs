//! Configuration file parsing.
//!
//! Parses individual `.tagrec.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{ConfigError, ExportLayout, PunctuationPolicy, StopwordLanguage};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Corpus ingestion section.
    pub corpus: Option<RawCorpusSettings>,
    /// Tokenizer section.
    pub tokenizer: Option<RawTokenizerSettings>,
    /// Stop-word section.
    pub stopwords: Option<RawStopwordSettings>,
    /// Suggestion display section.
    pub suggest: Option<RawSuggestSettings>,
    /// Export section.
    pub export: Option<RawExportSettings>,
    /// Output formatting section.
    pub output: Option<RawOutputSettings>,
    /// Stop-word discovery section.
    pub stops: Option<RawStopsSettings>,
}

/// Raw corpus settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCorpusSettings {
    /// Keep only the first N ingested records.
    pub max_records: Option<usize>,
}

/// Raw tokenizer settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTokenizerSettings {
    /// Punctuation handling policy.
    pub punctuation: Option<PunctuationPolicy>,
    /// Minimum token length.
    pub min_word_length: Option<usize>,
}

/// Raw stop-word settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStopwordSettings {
    /// Built-in list selection.
    pub language: Option<StopwordLanguage>,
    /// Extra stop words. Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub extra: Option<Vec<String>>,
}

/// Raw suggestion display settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSuggestSettings {
    /// Suggestions shown per record.
    pub top_n: Option<usize>,
    /// Remove terms already present in title or keywords.
    pub filter_existing: Option<bool>,
}

/// Raw export settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExportSettings {
    /// Suggestions written per record.
    pub top_n: Option<usize>,
    /// Row layout.
    pub layout: Option<ExportLayout>,
}

/// Raw output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutputSettings {
    /// Decimal digits for displayed scores.
    pub precision: Option<u32>,
}

/// Raw stop-word discovery settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStopsSettings {
    /// Most frequent tokens taken from each record.
    pub per_record: Option<usize>,
    /// Minimum share of records listing a term.
    pub min_share: Option<f64>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.corpus.is_none());
        assert!(config.stopwords.is_none());
        assert!(config.suggest.is_none());
        assert!(config.export.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[corpus]
max_records = 500

[tokenizer]
punctuation = "strip"
min_word_length = 3

[stopwords]
language = "none"
extra = ["noaa", "department"]

[suggest]
top_n = 4
filter_existing = false

[export]
top_n = 8
layout = "flat"

[output]
precision = 3

[stops]
per_record = 5
min_share = 0.25
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        assert_eq!(config.corpus.unwrap().max_records, Some(500));

        let tokenizer = config.tokenizer.unwrap();
        assert_eq!(tokenizer.punctuation, Some(PunctuationPolicy::Strip));
        assert_eq!(tokenizer.min_word_length, Some(3));

        let stopwords = config.stopwords.unwrap();
        assert_eq!(stopwords.language, Some(StopwordLanguage::None));
        assert_eq!(
            stopwords.extra,
            Some(vec!["noaa".to_string(), "department".to_string()])
        );

        let suggest = config.suggest.unwrap();
        assert_eq!(suggest.top_n, Some(4));
        assert_eq!(suggest.filter_existing, Some(false));

        let export = config.export.unwrap();
        assert_eq!(export.top_n, Some(8));
        assert_eq!(export.layout, Some(ExportLayout::Flat));

        assert_eq!(config.output.unwrap().precision, Some(3));

        let stops = config.stops.unwrap();
        assert_eq!(stops.per_record, Some(5));
        assert_eq!(stops.min_share, Some(0.25));
    }

    #[test]
    fn test_parse_single_extra_stopword() {
        let toml = r#"
[stopwords]
extra = "noaa"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(
            config.stopwords.unwrap().extra,
            Some(vec!["noaa".to_string()])
        );
    }

    #[test]
    fn test_parse_invalid_enum_value() {
        let toml = r#"
[export]
layout = "sideways"
"#;
        let result = parse_config_str(toml, Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_unknown_section() {
        let result = parse_config_str("[search]\nlimit = 3\n", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = parse_config_str("[suggest\n", Path::new("broken.toml")).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_is_root_config() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root.toml");
        fs::write(&root, "root = true\n").unwrap();
        let plain = dir.path().join("plain.toml");
        fs::write(&plain, "[suggest]\ntop_n = 2\n").unwrap();

        assert!(is_root_config(&root));
        assert!(!is_root_config(&plain));
        assert!(!is_root_config(&dir.path().join("missing.toml")));
    }
}
