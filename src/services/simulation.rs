use thiserror::Error;
use tracing::{debug, info};

use crate::domain::historical_pool::HistoricalPool;
use crate::domain::simulation_results::SimulationResults;
use crate::services::config::SimulationSettings;
use crate::services::history_csv::{HistoryError, load_pool_from_file};
use crate::services::round_aggregator::aggregate_round;
use crate::services::sampler::{ThroughputSampler, UniformSampler};
use crate::services::simulation_types::{PercentileValue, SimulationOutput, SimulationReport};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SimulationError {
    #[error("number of simulations must be at least 1, got {0}")]
    InvalidSimulations(usize),
    #[error("periods per round must be at least 1, got {0}")]
    InvalidPeriods(usize),
}

/// Validated run size: both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationParameters {
    number_of_simulations: usize,
    periods_per_round: usize,
}

impl SimulationParameters {
    pub const DEFAULT_SIMULATIONS: usize = 10_000;
    pub const DEFAULT_PERIODS_PER_ROUND: usize = 1;

    pub fn new(number_of_simulations: usize, periods_per_round: usize) -> Result<Self, SimulationError> {
        if number_of_simulations == 0 {
            return Err(SimulationError::InvalidSimulations(number_of_simulations));
        }
        if periods_per_round == 0 {
            return Err(SimulationError::InvalidPeriods(periods_per_round));
        }
        Ok(Self {
            number_of_simulations,
            periods_per_round,
        })
    }

    pub fn number_of_simulations(&self) -> usize {
        self.number_of_simulations
    }

    pub fn periods_per_round(&self) -> usize {
        self.periods_per_round
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            number_of_simulations: Self::DEFAULT_SIMULATIONS,
            periods_per_round: Self::DEFAULT_PERIODS_PER_ROUND,
        }
    }
}

/// Runs independent rounds against a historical pool. The sampler (and the
/// generator inside it) is owned by the engine and used strictly in order.
pub struct SimulationEngine<S: ThroughputSampler> {
    sampler: S,
}

impl<S: ThroughputSampler> SimulationEngine<S> {
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    pub fn run(&mut self, pool: &HistoricalPool, parameters: SimulationParameters) -> SimulationResults {
        debug!(
            simulations = parameters.number_of_simulations(),
            periods_per_round = parameters.periods_per_round(),
            pool_size = pool.len(),
            "starting simulation"
        );
        let totals: Vec<u64> = (0..parameters.number_of_simulations())
            .map(|_| aggregate_round(&mut self.sampler, pool, parameters.periods_per_round()))
            .collect();
        SimulationResults::from_unsorted(totals)
    }

    pub fn into_sampler(self) -> S {
        self.sampler
    }
}

/// Loads the history named in `settings`, runs the simulation and derives
/// the report.
pub fn simulate_from_history_file(
    settings: &SimulationSettings,
) -> Result<SimulationOutput, HistoryError> {
    let pool = load_pool_from_file(&settings.history_path, settings.delimiter)?;
    let mut engine = SimulationEngine::new(UniformSampler::with_optional_seed(settings.seed));
    let results = engine.run(&pool, settings.parameters);
    info!(
        simulations = results.len(),
        min = results.min(),
        max = results.max(),
        "simulation finished"
    );

    let report = build_report(&data_source_name(&settings.history_path), settings, &results);
    Ok(SimulationOutput { report, results })
}

pub(crate) fn build_report(
    data_source: &str,
    settings: &SimulationSettings,
    results: &SimulationResults,
) -> SimulationReport {
    let percentiles = settings
        .percentiles
        .iter()
        .filter_map(|request| {
            results.percentile(*request).map(|value| PercentileValue {
                percentile: request.percent(),
                label: format!("{} Percentile", request.ordinal()),
                value,
            })
        })
        .collect();

    SimulationReport {
        data_source: data_source.to_string(),
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        simulations: settings.parameters.number_of_simulations(),
        periods_per_round: settings.parameters.periods_per_round(),
        seed: settings.seed,
        min: results.min().unwrap_or_default(),
        max: results.max().unwrap_or_default(),
        mean: results.mean().unwrap_or_default(),
        percentiles,
        histogram: results.histogram(),
    }
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
