//! Implementation of `tagrec filter`.

use std::process::ExitCode;

use tagrec_engine::filter_candidates;

use super::shared::{open_input, open_output};
use crate::cli::{args::FilterCommand, context::CommandContext};

/// Removes topic-model candidates that repeat words of their record.
pub fn run(ctx: &CommandContext, cmd: &FilterCommand) -> ExitCode {
    let reader = match open_input(&cmd.input) {
        Ok(reader) => reader,
        Err(code) => return code,
    };
    let writer = match open_output(cmd.output.as_deref()) {
        Ok(writer) => writer,
        Err(code) => return code,
    };

    let engine = ctx.engine(false);
    match filter_candidates(reader, writer, engine.tokenizer()) {
        Ok(rows) => {
            eprintln!("{rows} records filtered");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to filter {}: {e}", cmd.input);
            ExitCode::FAILURE
        }
    }
}
