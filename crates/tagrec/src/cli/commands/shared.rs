//! Shared helpers for command implementations.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
    process::ExitCode,
};

use tagrec_config::Config;
use tagrec_engine::{EngineError, Ingested, SkippedRecord, read_records};

use crate::cli::{args::CorpusArgs, output::report_run};

/// Opens a file for reading, treating `-` as standard input.
pub fn open_input(path: &str) -> Result<Box<dyn Read>, ExitCode> {
    if path == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    match File::open(path) {
        Ok(file) => Ok(Box::new(BufReader::new(file))),
        Err(e) => {
            eprintln!("error: failed to open {path}: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}

/// Creates the output sink, defaulting to standard output.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, ExitCode> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdout().lock()));
    };
    match File::create(path) {
        Ok(file) => Ok(Box::new(BufWriter::new(file))),
        Err(e) => {
            eprintln!("error: failed to create {}: {e}", path.display());
            Err(ExitCode::FAILURE)
        }
    }
}

/// Reads records for a command, applying the corpus size cap.
///
/// `--max-records` overrides `[corpus] max_records`.
pub fn load_records(args: &CorpusArgs, config: &Config) -> Result<Ingested, ExitCode> {
    let reader = open_input(&args.file)?;
    let max_records = args.max_records.or(config.corpus.max_records);
    read_records(reader, max_records).map_err(|e| {
        eprintln!("error: failed to read records from {}: {e}", args.file);
        ExitCode::FAILURE
    })
}

/// Reports every skipped record and the run totals.
pub fn report_skips(scored: usize, malformed: &[SkippedRecord], degenerate: &[SkippedRecord]) {
    let skipped: Vec<&SkippedRecord> = malformed.iter().chain(degenerate).collect();
    report_run(scored, &skipped);
}

/// Prints an engine failure, after accounting for records skipped at ingestion.
pub fn engine_failure(error: &EngineError, malformed: &[SkippedRecord]) -> ExitCode {
    report_skips(0, malformed, &[]);
    eprintln!("error: {error}");
    ExitCode::FAILURE
}
