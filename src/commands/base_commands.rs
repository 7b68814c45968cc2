use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::services::config::SimulationOverrides;
use crate::services::percentiles::PercentileRequest;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast total delivered items over a number of future periods
    Simulate {
        /// History CSV file, one `label,delivered items` row per period [default: historic.csv]
        #[arg(short = 'f', long)]
        history: Option<String>,
        /// Number of simulated rounds [default: 10000]
        #[arg(short = 'n', long)]
        simulations: Option<usize>,
        /// Number of periods summed into each round [default: 1]
        #[arg(short, long)]
        periods: Option<usize>,
        /// Output PNG chart [default: MonteCarloResults.png]
        #[arg(short, long)]
        output: Option<String>,
        /// Percentiles to report, in order [default: 50,10,15,20,25]
        #[arg(long, value_delimiter = ',')]
        percentiles: Option<Vec<PercentileRequest>>,
        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
        /// Field delimiter of the history file [default: ,]
        #[arg(short, long)]
        delimiter: Option<char>,
        /// Write the full report to this file (.json for JSON, YAML otherwise)
        #[arg(short, long)]
        report: Option<String>,
        /// Optional YAML file with simulation settings
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Plot the historical delivered items into a PNG chart
    PlotHistory {
        /// History CSV file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Field delimiter of the history file
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Splits `simulate` arguments into the command-line overrides and the
/// optional config file path.
pub fn simulate_overrides(cmd: &Commands) -> Option<(SimulationOverrides, Option<String>)> {
    if let Commands::Simulate {
        history,
        simulations,
        periods,
        output,
        percentiles,
        seed,
        delimiter,
        report,
        config,
    } = cmd
    {
        let overrides = SimulationOverrides {
            history: history.clone(),
            delimiter: *delimiter,
            simulations: *simulations,
            periods_per_round: *periods,
            percentiles: percentiles.clone(),
            seed: *seed,
            output: output.clone(),
            report: report.clone(),
        };
        Some((overrides, config.clone()))
    } else {
        None
    }
}
