//! Clap argument definitions for the `tagrec` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "tagrec")]
#[command(about = "Suggest catalog tags from corpus-wide TF-IDF scores")]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Corpus input shared by commands that score records.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// JSON file of records, or - for standard input
    pub file: String,

    /// Score only the first N records of the input
    #[arg(long)]
    pub max_records: Option<usize>,
}

/// Arguments for `tagrec suggest`.
#[derive(Args, Debug, Clone)]
pub struct SuggestCommand {
    #[command(flatten)]
    /// Corpus input.
    pub corpus: CorpusArgs,

    /// Suggestions shown per record [default: 3]
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Keep terms already present in the record's title or keywords
    #[arg(long)]
    pub all_terms: bool,

    /// Output in JSON format, with scores rounded to [output] precision
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `tagrec export`.
#[derive(Args, Debug, Clone)]
pub struct ExportCommand {
    #[command(flatten)]
    /// Corpus input.
    pub corpus: CorpusArgs,

    /// Write CSV to this file instead of standard output
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Suggestions written per record [default: 5]
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Repeat the record id on every row instead of grouping rows
    #[arg(long)]
    pub flat: bool,

    /// Keep terms already present in the record's title or keywords
    #[arg(long)]
    pub all_terms: bool,
}

/// Arguments for `tagrec presence`.
#[derive(Args, Debug, Clone)]
pub struct PresenceCommand {
    #[command(flatten)]
    /// Corpus input.
    pub corpus: CorpusArgs,

    /// Terms to look up
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `tagrec stops`.
#[derive(Args, Debug, Clone)]
pub struct StopsCommand {
    #[command(flatten)]
    /// Corpus input.
    pub corpus: CorpusArgs,

    /// Most frequent tokens taken from each record [default: 10]
    #[arg(long)]
    pub per_record: Option<usize>,

    /// Minimum share of records listing a term (0.0-1.0] [default: 0.5]
    #[arg(long)]
    pub min_share: Option<f64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `tagrec filter`.
#[derive(Args, Debug, Clone)]
pub struct FilterCommand {
    /// Topic-model candidate CSV, or - for standard input
    pub input: String,

    /// Write CSV to this file instead of standard output
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `tagrec init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.tagrec.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `tagrec` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the best tag suggestions for each record
    #[command(after_help = "\
INPUT:
  A JSON array of records, or an object holding the array under \"dataset\".
  Each record needs id (or identifier), title, description and keyword
  (or keywords). Records missing a field are skipped and reported.

EXAMPLES:
  tagrec suggest records.json
  tagrec suggest records.json -n 5 --json
  curl -s https://example.org/data.json | tagrec suggest -")]
    Suggest(SuggestCommand),

    /// Write tag suggestions for every record as CSV
    Export(ExportCommand),

    /// Show the share of records containing each term
    Presence(PresenceCommand),

    /// Find catalog-specific stop word candidates
    Stops(StopsCommand),

    /// Remove topic-model keyword candidates already present in record text
    #[command(after_help = "\
INPUT COLUMNS:
  record_id or record_index   Record identity
  record_text                 Text the candidates were derived from
  suggested_keywords          Space separated candidate keywords

Other columns are ignored. Output has columns record_id,suggested_keywords.")]
    Filter(FilterCommand),

    /// Initialize tagrec configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
