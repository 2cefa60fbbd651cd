//! Command-line interface for the `tagrec` tag recommender.

use std::process::ExitCode;

use tagrec::cli::{
    args::{Commands, parse_cli},
    commands,
    context::CommandContext,
    logging,
};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    // `init` must work even when an existing config file is broken.
    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
