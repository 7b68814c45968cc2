use serde::Serialize;

use crate::domain::simulation_results::{HistogramEntry, SimulationResults};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PercentileValue {
    pub percentile: f64,
    pub label: String,
    pub value: u64,
}

#[derive(Serialize, Debug, Clone)]
pub struct SimulationReport {
    pub data_source: String,
    pub generated_at: String,
    pub simulations: usize,
    pub periods_per_round: usize,
    pub seed: Option<u64>,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub percentiles: Vec<PercentileValue>,
    pub histogram: Vec<HistogramEntry>,
}

#[derive(Debug, Clone)]
pub struct SimulationOutput {
    pub report: SimulationReport,
    pub results: SimulationResults,
}
