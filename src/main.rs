mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::completions_cmd::completions_command;
use crate::commands::plot_history_cmd::plot_history_command;
use crate::commands::simulate_cmd::simulate_command;
use clap::Parser;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init_tracing(args.verbose);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting");

    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::PlotHistory { .. } => plot_history_command(cmd),
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
}
