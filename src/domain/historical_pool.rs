use thiserror::Error;

use crate::domain::throughput::ThroughputRecord;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("historical pool must contain at least one value")]
pub struct EmptyPoolError;

/// Observed per-period output counts. Never empty, never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalPool {
    values: Vec<u32>,
}

impl HistoricalPool {
    pub fn new(values: Vec<u32>) -> Result<Self, EmptyPoolError> {
        if values.is_empty() {
            return Err(EmptyPoolError);
        }
        Ok(Self { values })
    }

    pub fn from_records(records: &[ThroughputRecord]) -> Result<Self, EmptyPoolError> {
        Self::new(records.iter().map(|r| r.delivered_items).collect())
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn min(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or_default()
    }

    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or_default()
    }
}
