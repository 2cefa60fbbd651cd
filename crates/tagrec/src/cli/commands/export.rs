//! Implementation of `tagrec export`.

use std::process::ExitCode;

use tagrec_config::ExportLayout;
use tagrec_engine::write_csv;

use super::shared::{engine_failure, load_records, open_output, report_skips};
use crate::cli::{args::ExportCommand, context::CommandContext};

/// Writes suggestions for every record as CSV.
pub fn run(ctx: &CommandContext, cmd: &ExportCommand) -> ExitCode {
    let config = &ctx.config;
    let ingested = match load_records(&cmd.corpus, config) {
        Ok(ingested) => ingested,
        Err(code) => return code,
    };

    let top_n = cmd.top_n.unwrap_or(config.export.top_n);
    let report = match ctx.engine(cmd.all_terms).run(&ingested.records, top_n) {
        Ok(report) => report,
        Err(e) => return engine_failure(&e, &ingested.malformed),
    };

    let layout = if cmd.flat {
        ExportLayout::Flat
    } else {
        config.export.layout
    };

    let writer = match open_output(cmd.output.as_deref()) {
        Ok(writer) => writer,
        Err(code) => return code,
    };

    let rows = match write_csv(writer, &report.suggestions, layout, config.output.precision) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("error: failed to write CSV: {e}");
            return ExitCode::FAILURE;
        }
    };

    report_skips(report.corpus_size, &ingested.malformed, &report.skipped);
    if let Some(path) = &cmd.output {
        eprintln!("Wrote {rows} tag rows to {}", path.display());
    }

    ExitCode::SUCCESS
}
