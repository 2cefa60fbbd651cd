//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for settings that are
//! legal TOML but will produce surprising runs.

use std::fmt;

use crate::Config;

/// Largest precision that still changes an `f64` when rounding.
const MAX_USEFUL_PRECISION: u32 = 15;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// A top-N setting is zero, so the mode emits no suggestions.
    ZeroTopN {
        /// Section holding the setting.
        section: &'static str,
    },
    /// The corpus cap is zero, so every run fails with an empty corpus.
    ZeroMaxRecords,
    /// The precision exceeds what an `f64` can represent.
    ExcessivePrecision {
        /// Configured precision.
        precision: u32,
    },
    /// An extra stop word contains characters that never survive tokenization.
    UnmatchableStopword {
        /// The offending word.
        word: String,
    },
    /// The discovery share threshold is outside (0, 1].
    ShareOutOfRange {
        /// Configured share.
        min_share: f64,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTopN { section } => {
                write!(f, "[{section}] top_n is 0, no suggestions will be emitted")
            }
            Self::ZeroMaxRecords => {
                write!(f, "[corpus] max_records is 0, every run will have an empty corpus")
            }
            Self::ExcessivePrecision { precision } => {
                write!(
                    f,
                    "[output] precision {precision} exceeds {MAX_USEFUL_PRECISION} digits"
                )
            }
            Self::UnmatchableStopword { word } => {
                write!(
                    f,
                    "stop word '{word}' is not alphabetic and can never match a token"
                )
            }
            Self::ShareOutOfRange { min_share } => {
                write!(f, "[stops] min_share {min_share} is outside (0, 1]")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.suggest.top_n == 0 {
        warnings.push(ConfigWarning::ZeroTopN { section: "suggest" });
    }
    if config.export.top_n == 0 {
        warnings.push(ConfigWarning::ZeroTopN { section: "export" });
    }
    if config.corpus.max_records == Some(0) {
        warnings.push(ConfigWarning::ZeroMaxRecords);
    }
    if config.output.precision > MAX_USEFUL_PRECISION {
        warnings.push(ConfigWarning::ExcessivePrecision {
            precision: config.output.precision,
        });
    }

    for word in &config.stopwords.extra {
        if !word.chars().all(char::is_alphabetic) {
            warnings.push(ConfigWarning::UnmatchableStopword { word: word.clone() });
        }
    }

    let share = config.stops.min_share;
    if !(share > 0.0 && share <= 1.0) {
        warnings.push(ConfigWarning::ShareOutOfRange { min_share: share });
    }

    warnings
}
