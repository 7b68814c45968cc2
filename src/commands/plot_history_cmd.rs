use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::history_plot::plot_history_from_file;

pub fn plot_history_command(cmd: Commands) -> ExitCode {
    if let Commands::PlotHistory {
        input,
        output,
        delimiter,
    } = cmd
    {
        match plot_history_from_file(&input, delimiter, &output) {
            Ok(periods) => {
                println!("History plot of {periods} periods written to {output}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to plot history: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        ExitCode::FAILURE
    }
}
