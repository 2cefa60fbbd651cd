//! Command implementations and dispatch.

pub mod config;
pub mod export;
pub mod filter;
pub mod init;
pub mod presence;
mod shared;
pub mod stops;
pub mod suggest;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Suggest(cmd) => suggest::run(ctx, &cmd),
        Commands::Export(cmd) => export::run(ctx, &cmd),
        Commands::Presence(cmd) => presence::run(ctx, &cmd),
        Commands::Stops(cmd) => stops::run(ctx, &cmd),
        Commands::Filter(cmd) => filter::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
