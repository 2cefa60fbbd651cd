//! Implementation of `tagrec presence`.

use std::process::ExitCode;

use tagrec_engine::CorpusStats;

use super::shared::{engine_failure, load_records, report_skips};
use crate::cli::{
    args::PresenceCommand,
    context::CommandContext,
    output::{TermPresence, print_json, print_presence},
};

/// Shows the share of records containing each requested term.
pub fn run(ctx: &CommandContext, cmd: &PresenceCommand) -> ExitCode {
    let ingested = match load_records(&cmd.corpus, &ctx.config) {
        Ok(ingested) => ingested,
        Err(code) => return code,
    };

    let engine = ctx.engine(false);
    let built = match engine.build_corpus(&ingested.records) {
        Ok(built) => built,
        Err(e) => return engine_failure(&e, &ingested.malformed),
    };
    let corpus = &built.corpus;

    let rows: Vec<TermPresence> = cmd
        .terms
        .iter()
        .map(|term| {
            // Terms that cannot survive tokenization are looked up lowercased
            // and simply report zero.
            let term = engine
                .tokenizer()
                .normalize(term)
                .unwrap_or_else(|| term.to_lowercase());
            TermPresence {
                documents: corpus.document_frequency(&term),
                percent: corpus.presence(&term),
                term,
            }
        })
        .collect();

    report_skips(corpus.len(), &ingested.malformed, &built.skipped);

    if cmd.json {
        return print_json(&rows);
    }

    print_presence(&rows, corpus.len());
    ExitCode::SUCCESS
}
