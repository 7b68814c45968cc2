use crate::services::simulation_types::{PercentileValue, SimulationReport};

pub fn format_simulation_report(report: &SimulationReport) -> String {
    let seed = match report.seed {
        Some(value) => value.to_string(),
        None => "random".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Monte Carlo Simulation Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Simulations: {}", report.simulations));
    lines.push(format!("Periods per round: {}", report.periods_per_round));
    lines.push(format!("Seed: {}", seed));
    lines.push(format!("Range: {} - {}", report.min, report.max));
    lines.push(format!("Mean: {:.2}", report.mean));
    lines.push(String::new());
    lines.extend(report.percentiles.iter().map(format_percentile_row));

    lines.join("\n")
}

fn format_percentile_row(percentile: &PercentileValue) -> String {
    format!("{}: {}", percentile.label, percentile.value)
}
