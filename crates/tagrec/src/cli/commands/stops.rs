//! Implementation of `tagrec stops`.

use std::process::ExitCode;

use tagrec_engine::discover_stopwords;

use super::shared::{engine_failure, load_records, report_skips};
use crate::cli::{
    args::StopsCommand,
    context::CommandContext,
    output::{print_json, print_stopword_candidates},
};

/// Lists terms frequent in a large share of records.
pub fn run(ctx: &CommandContext, cmd: &StopsCommand) -> ExitCode {
    let settings = &ctx.config.stops;
    let per_record = cmd.per_record.unwrap_or(settings.per_record);
    let min_share = cmd.min_share.unwrap_or(settings.min_share);

    if !(min_share > 0.0 && min_share <= 1.0) {
        eprintln!("error: --min-share must be in (0, 1], got {min_share}");
        return ExitCode::FAILURE;
    }

    let ingested = match load_records(&cmd.corpus, &ctx.config) {
        Ok(ingested) => ingested,
        Err(code) => return code,
    };

    let built = match ctx.engine(false).build_corpus(&ingested.records) {
        Ok(built) => built,
        Err(e) => return engine_failure(&e, &ingested.malformed),
    };

    let candidates = discover_stopwords(&built.corpus, per_record, min_share);
    report_skips(built.corpus.len(), &ingested.malformed, &built.skipped);

    if cmd.json {
        return print_json(&candidates);
    }

    print_stopword_candidates(&candidates);
    ExitCode::SUCCESS
}
