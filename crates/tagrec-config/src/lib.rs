//! Configuration system for tagrec.
//!
//! tagrec uses TOML configuration files named `.tagrec.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.tagrec.toml` files found, then loading `~/.tagrec.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::merge_configs;
pub use parse::{
    RawConfig, RawCorpusSettings, RawExportSettings, RawOutputSettings, RawStopsSettings,
    RawStopwordSettings, RawSuggestSettings, RawTokenizerSettings, parse_config_file,
    parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default number of suggestions shown per record by `tagrec suggest`.
pub const DEFAULT_SUGGEST_TOP_N: usize = 3;

/// Default number of suggestions written per record by `tagrec export`.
pub const DEFAULT_EXPORT_TOP_N: usize = 5;

/// Default number of decimal digits for displayed scores.
pub const DEFAULT_PRECISION: u32 = 5;

/// Default number of most frequent tokens taken from each record for stop-word discovery.
pub const DEFAULT_STOPS_PER_RECORD: usize = 10;

/// Default minimum share of records that must list a term among their top tokens.
pub const DEFAULT_STOPS_MIN_SHARE: f64 = 0.5;

/// Top-level merged configuration for tagrec.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.tagrec.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Corpus ingestion settings.
    pub corpus: CorpusSettings,
    /// Tokenizer settings.
    pub tokenizer: TokenizerSettings,
    /// Stop-word settings.
    pub stopwords: StopwordSettings,
    /// Interactive suggestion settings.
    pub suggest: SuggestSettings,
    /// Persisted export settings.
    pub export: ExportSettings,
    /// Shared output formatting settings.
    pub output: OutputSettings,
    /// Domain stop-word discovery settings.
    pub stops: StopsSettings,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.tagrec.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.tagrec.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.tagrec.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed = files
            .iter()
            .map(|path| parse_config_file(path))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.tagrec.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            corpus: &self.corpus,
            tokenizer: &self.tokenizer,
            stopwords: &self.stopwords,
            suggest: &self.suggest,
            export: &self.export,
            output: &self.output,
            stops: &self.stops,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Corpus ingestion settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Keep only the first N ingested records (unset keeps all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<usize>,
}

/// How punctuation attached to a word is treated during tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationPolicy {
    /// Any token containing a non-alphabetic character is dropped entirely.
    #[default]
    Drop,
    /// Leading and trailing ASCII punctuation is trimmed before the alphabetic check.
    Strip,
}

impl fmt::Display for PunctuationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop => write!(f, "drop"),
            Self::Strip => write!(f, "strip"),
        }
    }
}

/// Tokenizer settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenizerSettings {
    /// Punctuation handling policy.
    pub punctuation: PunctuationPolicy,
    /// Tokens shorter than this many characters are ignored.
    pub min_word_length: usize,
}

impl Default for TokenizerSettings {
    fn default() -> Self {
        Self {
            punctuation: PunctuationPolicy::Drop,
            min_word_length: 1,
        }
    }
}

/// Built-in stop-word list selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordLanguage {
    /// English stop words.
    #[default]
    English,
    /// No built-in stop words.
    None,
}

impl fmt::Display for StopwordLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Stop-word settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StopwordSettings {
    /// Built-in list to start from.
    pub language: StopwordLanguage,
    /// Additional domain-specific stop words.
    pub extra: Vec<String>,
}

/// Settings for `tagrec suggest`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SuggestSettings {
    /// Suggestions shown per record.
    pub top_n: usize,
    /// Remove terms already present in the record's title or keywords.
    pub filter_existing: bool,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_SUGGEST_TOP_N,
            filter_existing: true,
        }
    }
}

/// Row layout of exported suggestion tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportLayout {
    /// A record id row heads each block of tag rows.
    #[default]
    Grouped,
    /// Every row carries its record id.
    Flat,
}

impl fmt::Display for ExportLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grouped => write!(f, "grouped"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Settings for `tagrec export`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Suggestions written per record.
    pub top_n: usize,
    /// Row layout.
    pub layout: ExportLayout,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_EXPORT_TOP_N,
            layout: ExportLayout::Grouped,
        }
    }
}

/// Shared output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Decimal digits kept in displayed and exported scores.
    pub precision: u32,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Settings for domain stop-word discovery.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StopsSettings {
    /// Most frequent tokens taken from each record.
    pub per_record: usize,
    /// Minimum share of records (0.0-1.0] listing a term for it to be reported.
    pub min_share: f64,
}

impl Default for StopsSettings {
    fn default() -> Self {
        Self {
            per_record: DEFAULT_STOPS_PER_RECORD,
            min_share: DEFAULT_STOPS_MIN_SHARE,
        }
    }
}

/// Borrowed view of every settings section for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Corpus ingestion settings.
    corpus: &'a CorpusSettings,
    /// Tokenizer settings.
    tokenizer: &'a TokenizerSettings,
    /// Stop-word settings.
    stopwords: &'a StopwordSettings,
    /// Interactive suggestion settings.
    suggest: &'a SuggestSettings,
    /// Export settings.
    export: &'a ExportSettings,
    /// Output settings.
    output: &'a OutputSettings,
    /// Stop-word discovery settings.
    stops: &'a StopsSettings,
}
