use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::services::histogram_chart::DEFAULT_CHART_SIZE;
use crate::services::history_csv::DEFAULT_DELIMITER;
use crate::services::percentiles::{PercentileError, PercentileRequest, default_percentiles};
use crate::services::simulation::{SimulationError, SimulationParameters};

pub const DEFAULT_HISTORY_PATH: &str = "historic.csv";
pub const DEFAULT_CHART_PATH: &str = "MonteCarloResults.png";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid simulation parameters: {0}")]
    Parameters(#[from] SimulationError),
    #[error("invalid percentile: {0}")]
    Percentile(#[from] PercentileError),
    #[error("no percentiles requested")]
    NoPercentiles,
    #[error("chart size must be positive, got {0}x{1}")]
    ChartSize(u32, u32),
}

/// Optional settings read from a YAML file. Every field may be omitted.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub history: Option<String>,
    pub delimiter: Option<char>,
    pub simulations: Option<usize>,
    pub periods_per_round: Option<usize>,
    pub percentiles: Option<Vec<f64>>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub chart_width: Option<u32>,
    pub chart_height: Option<u32>,
    pub report: Option<String>,
}

/// Values given on the command line. They win over the config file.
#[derive(Debug, Default, Clone)]
pub struct SimulationOverrides {
    pub history: Option<String>,
    pub delimiter: Option<char>,
    pub simulations: Option<usize>,
    pub periods_per_round: Option<usize>,
    pub percentiles: Option<Vec<PercentileRequest>>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub report: Option<String>,
}

/// Fully resolved settings for one `simulate` run.
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub history_path: String,
    pub delimiter: char,
    pub parameters: SimulationParameters,
    pub percentiles: Vec<PercentileRequest>,
    pub seed: Option<u64>,
    pub chart_path: String,
    pub chart_size: (u32, u32),
    pub report_path: Option<String>,
}

pub fn parse_config_yaml(yaml: &str) -> Result<SimulationConfig, ConfigError> {
    Ok(serde_yaml::from_str(yaml)?)
}

pub fn load_config_file(path: &str) -> Result<SimulationConfig, ConfigError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let config = parse_config_yaml(&yaml)?;
    debug!(path, ?config, "config file loaded");
    Ok(config)
}

/// Merges command line, config file and built-in defaults, in that order.
pub fn resolve_settings(
    overrides: SimulationOverrides,
    config: SimulationConfig,
) -> Result<SimulationSettings, ConfigError> {
    let parameters = SimulationParameters::new(
        overrides
            .simulations
            .or(config.simulations)
            .unwrap_or(SimulationParameters::DEFAULT_SIMULATIONS),
        overrides
            .periods_per_round
            .or(config.periods_per_round)
            .unwrap_or(SimulationParameters::DEFAULT_PERIODS_PER_ROUND),
    )?;

    let percentiles = match (overrides.percentiles, config.percentiles) {
        (Some(requests), _) => requests,
        (None, Some(percents)) => percents
            .into_iter()
            .map(PercentileRequest::new)
            .collect::<Result<Vec<_>, _>>()?,
        (None, None) => default_percentiles(),
    };
    if percentiles.is_empty() {
        return Err(ConfigError::NoPercentiles);
    }

    let chart_size = (
        config.chart_width.unwrap_or(DEFAULT_CHART_SIZE.0),
        config.chart_height.unwrap_or(DEFAULT_CHART_SIZE.1),
    );
    if chart_size.0 == 0 || chart_size.1 == 0 {
        return Err(ConfigError::ChartSize(chart_size.0, chart_size.1));
    }

    Ok(SimulationSettings {
        history_path: overrides
            .history
            .or(config.history)
            .unwrap_or_else(|| DEFAULT_HISTORY_PATH.to_string()),
        delimiter: overrides
            .delimiter
            .or(config.delimiter)
            .unwrap_or(DEFAULT_DELIMITER),
        parameters,
        percentiles,
        seed: overrides.seed.or(config.seed),
        chart_path: overrides
            .output
            .or(config.output)
            .unwrap_or_else(|| DEFAULT_CHART_PATH.to_string()),
        chart_size,
        report_path: overrides.report.or(config.report),
    })
}
