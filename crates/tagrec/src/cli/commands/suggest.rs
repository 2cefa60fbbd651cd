//! Implementation of `tagrec suggest`.

use std::process::ExitCode;

use serde::Serialize;
use tagrec_engine::SuggestionList;

use super::shared::{engine_failure, load_records, report_skips};
use crate::cli::{
    args::SuggestCommand,
    context::CommandContext,
    output::{print_json, print_suggestions},
};

/// JSON output for `tagrec suggest --json`.
///
/// Scores are rounded to `[output] precision` like the table.
#[derive(Serialize)]
struct JsonSuggestOutput {
    /// Number of records in the corpus.
    corpus_size: usize,
    /// Number of distinct terms in the corpus.
    vocabulary_size: usize,
    /// Number of records left out of the run.
    skipped: usize,
    /// Suggestions per record.
    records: Vec<SuggestionList>,
}

/// Shows the top suggestions for every record.
pub fn run(ctx: &CommandContext, cmd: &SuggestCommand) -> ExitCode {
    let ingested = match load_records(&cmd.corpus, &ctx.config) {
        Ok(ingested) => ingested,
        Err(code) => return code,
    };

    let top_n = cmd.top_n.unwrap_or(ctx.config.suggest.top_n);
    let report = match ctx.engine(cmd.all_terms).run(&ingested.records, top_n) {
        Ok(report) => report,
        Err(e) => return engine_failure(&e, &ingested.malformed),
    };

    report_skips(report.corpus_size, &ingested.malformed, &report.skipped);

    let precision = ctx.config.output.precision;
    if cmd.json {
        return print_json(&JsonSuggestOutput {
            corpus_size: report.corpus_size,
            vocabulary_size: report.vocabulary_size,
            skipped: ingested.malformed.len() + report.skipped.len(),
            records: report
                .suggestions
                .iter()
                .map(|list| list.rounded(precision))
                .collect(),
        });
    }

    print_suggestions(&report.suggestions, precision);
    ExitCode::SUCCESS
}
