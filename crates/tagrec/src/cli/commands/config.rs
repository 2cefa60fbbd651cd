//! Implementation of `tagrec config`.

use std::process::ExitCode;

use tagrec_config::discover_config_files;

use crate::cli::{
    context::CommandContext,
    output::{dim, warning},
};

/// Shows effective configuration settings and any validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    let files = discover_config_files(&ctx.cwd);
    if files.is_empty() {
        eprintln!("{}", dim("No configuration files found, showing defaults."));
    } else {
        for path in &files {
            eprintln!("{}", dim(&format!("# from {}", path.display())));
        }
    }

    match config.settings_to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    for w in config.validate() {
        eprintln!("{}", warning(&format!("warning: {w}")));
    }

    ExitCode::SUCCESS
}
