use std::io::Write;
use std::process::ExitCode;

use thiserror::Error;
use tracing::warn;

use crate::commands::base_commands::{Commands, simulate_overrides};
use crate::commands::report_format::format_simulation_report;
use crate::services::config::{
    ConfigError, SimulationConfig, SimulationOverrides, SimulationSettings, load_config_file,
    resolve_settings,
};
use crate::services::histogram::chart_bars;
use crate::services::histogram_chart::{ChartError, ChartRenderer, PngBarChart};
use crate::services::history_csv::HistoryError;
use crate::services::report_writer::{ReportError, write_report_file};
use crate::services::simulation::simulate_from_history_file;

#[derive(Error, Debug)]
pub enum SimulateCommandError {
    #[error("failed to load simulation settings: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to load history: {0}")]
    History(#[from] HistoryError),
    #[error("failed to print report: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to write report file: {0}")]
    Report(#[from] ReportError),
    #[error("failed to write chart: {0}")]
    Chart(#[from] ChartError),
}

pub fn simulate_command(cmd: Commands) -> ExitCode {
    let Some((overrides, config_path)) = simulate_overrides(&cmd) else {
        return ExitCode::FAILURE;
    };
    match execute(overrides, config_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to simulate: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(
    overrides: SimulationOverrides,
    config_path: Option<&str>,
) -> Result<(), SimulateCommandError> {
    let settings = load_settings(overrides, config_path)?;
    let mut chart = PngBarChart::new(settings.chart_path.clone(), settings.chart_size);
    let mut stdout = std::io::stdout().lock();
    run_simulation(&settings, &mut chart, &mut stdout)
}

fn load_settings(
    overrides: SimulationOverrides,
    config_path: Option<&str>,
) -> Result<SimulationSettings, ConfigError> {
    let config = match config_path {
        Some(path) => load_config_file(path)?,
        None => SimulationConfig::default(),
    };
    resolve_settings(overrides, config)
}

/// Prints the percentile report first, then writes the optional report file
/// and the chart, so a late failure never hides already-computed numbers.
pub fn run_simulation<R: ChartRenderer + ?Sized, W: Write>(
    settings: &SimulationSettings,
    renderer: &mut R,
    out: &mut W,
) -> Result<(), SimulateCommandError> {
    let simulation = simulate_from_history_file(settings)?;

    writeln!(out, "{}", format_simulation_report(&simulation.report))?;
    out.flush()?;

    let mut report_failure = None;
    if let Some(report_path) = &settings.report_path {
        match write_report_file(report_path, &simulation.report) {
            Ok(()) => writeln!(out, "Simulation report written to {report_path}")?,
            Err(e) => {
                warn!(path = %report_path, error = %e, "report file not written, rendering chart anyway");
                report_failure = Some(e);
            }
        }
    }

    renderer.render(&chart_bars(&simulation.results.histogram()))?;
    writeln!(out, "Chart saved to {}", settings.chart_path)?;

    match report_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::histogram::ChartBar;
    use crate::services::percentiles::PercentileRequest;
    use crate::services::simulation::SimulationParameters;
    use crate::test_support::settings_for;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[derive(Default)]
    struct RecordingChart {
        bars: Vec<ChartBar>,
    }

    impl ChartRenderer for RecordingChart {
        fn render(&mut self, bars: &[ChartBar]) -> Result<(), ChartError> {
            self.bars = bars.to_vec();
            Ok(())
        }
    }

    struct FailingChart;

    impl ChartRenderer for FailingChart {
        fn render(&mut self, _bars: &[ChartBar]) -> Result<(), ChartError> {
            Err(ChartError::Render("disk full".to_string()))
        }
    }

    fn history_file(contents: &str) -> assert_fs::NamedTempFile {
        let file = assert_fs::NamedTempFile::new("historic.csv").unwrap();
        file.write_str(contents).unwrap();
        file
    }

    #[test]
    fn run_simulation_prints_percentiles_and_hands_bars_to_chart() {
        let history = history_file("mon,10\ntue,10\nwed,10\n");
        let mut settings = settings_for(history.path().to_str().unwrap());
        settings.parameters = SimulationParameters::new(100, 2).unwrap();

        let mut chart = RecordingChart::default();
        let mut out = Vec::new();
        run_simulation(&settings, &mut chart, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        for label in ["50th", "10th", "15th", "20th", "25th"] {
            assert!(output.contains(&format!("{label} Percentile: 20")), "{output}");
        }
        assert_eq!(
            chart.bars,
            vec![ChartBar {
                position: 0,
                frequency: 100,
                label: "20".to_string(),
            }]
        );
    }

    #[test]
    fn run_simulation_keeps_report_when_chart_fails() {
        let history = history_file("a,x\nb,5\nc,\n");
        let mut settings = settings_for(history.path().to_str().unwrap());
        settings.parameters = SimulationParameters::new(10, 1).unwrap();
        settings.percentiles = vec![PercentileRequest::new(50.0).unwrap()];

        let mut out = Vec::new();
        let error = run_simulation(&settings, &mut FailingChart, &mut out)
            .expect_err("expected chart failure");

        assert!(matches!(error, SimulateCommandError::Chart(_)));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("50th Percentile: 5"));
        assert!(!output.contains("Chart saved"));
    }

    #[test]
    fn run_simulation_writes_report_file() {
        let history = history_file("a,1\nb,2\n");
        let report = assert_fs::NamedTempFile::new("report.json").unwrap();
        let mut settings = settings_for(history.path().to_str().unwrap());
        settings.parameters = SimulationParameters::new(50, 2).unwrap();
        settings.seed = Some(3);
        settings.report_path = Some(report.path().to_str().unwrap().to_string());

        let mut out = Vec::new();
        run_simulation(&settings, &mut RecordingChart::default(), &mut out).unwrap();

        report.assert(predicate::str::contains("\"simulations\": 50"));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Simulation report written to"));
    }

    #[test]
    fn run_simulation_stops_before_printing_on_empty_history() {
        let history = history_file("header,only\n");
        let settings = settings_for(history.path().to_str().unwrap());

        let mut chart = RecordingChart::default();
        let mut out = Vec::new();
        let error = run_simulation(&settings, &mut chart, &mut out).expect_err("expected error");

        assert!(matches!(
            error,
            SimulateCommandError::History(HistoryError::EmptyPool(_))
        ));
        assert!(out.is_empty());
        assert!(chart.bars.is_empty());
    }
}
