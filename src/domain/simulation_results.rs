use serde::Serialize;

use crate::services::histogram::build_histogram;
use crate::services::percentiles::{PercentileRequest, value_sorted};

/// One bar of the result distribution: a distinct round total and how many
/// rounds produced it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramEntry {
    pub value: u64,
    pub count: usize,
}

/// Round totals of a finished simulation, sorted ascending on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResults {
    values: Vec<u64>,
}

impl SimulationResults {
    pub fn from_unsorted(mut values: Vec<u64>) -> Self {
        values.sort_unstable();
        Self { values }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Option<u64> {
        self.values.first().copied()
    }

    pub fn max(&self) -> Option<u64> {
        self.values.last().copied()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: u128 = self.values.iter().map(|v| u128::from(*v)).sum();
        Some(sum as f64 / self.values.len() as f64)
    }

    pub fn percentile(&self, request: PercentileRequest) -> Option<u64> {
        value_sorted(&self.values, request)
    }

    pub fn histogram(&self) -> Vec<HistogramEntry> {
        build_histogram(&self.values)
    }
}
