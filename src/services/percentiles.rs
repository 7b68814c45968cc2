//! Nearest-rank percentiles for already-sorted slices.
//!
//! - Empty input => `None`.
//! - The index is `ceil(p * len / 100) - 1`, clamped to `[0, len-1]`, so the
//!   answer is always an observed value, never an interpolation.
//! - `p = 100` selects the last element; tiny `p` selects the first one.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PercentileError {
    #[error("percentile must be greater than 0 and at most 100, got {0}")]
    OutOfRange(f64),
    #[error("percentile is not a number: {0}")]
    NotANumber(String),
}

/// A percentage in `(0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PercentileRequest(f64);

impl PercentileRequest {
    pub fn new(percent: f64) -> Result<Self, PercentileError> {
        if percent.is_nan() || percent <= 0.0 || percent > 100.0 {
            return Err(PercentileError::OutOfRange(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// "1st", "22nd", "50th", "12.5th".
    pub fn ordinal(self) -> String {
        if self.0.fract() != 0.0 {
            return format!("{}th", self.0);
        }
        let whole = self.0 as u64;
        let suffix = match (whole % 10, whole % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{whole}{suffix}")
    }
}

impl fmt::Display for PercentileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PercentileRequest {
    type Err = PercentileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent = s
            .trim()
            .parse::<f64>()
            .map_err(|_| PercentileError::NotANumber(s.to_string()))?;
        Self::new(percent)
    }
}

pub const DEFAULT_PERCENTILES: [f64; 5] = [50.0, 10.0, 15.0, 20.0, 25.0];

pub fn default_percentiles() -> Vec<PercentileRequest> {
    DEFAULT_PERCENTILES.iter().map(|p| PercentileRequest(*p)).collect()
}

/// Position of the nearest-rank element for `request` among `len` sorted values.
pub fn nearest_rank_index(len: usize, request: PercentileRequest) -> Option<usize> {
    if len == 0 {
        return None;
    }
    // Multiply first: p * len is exact for integral inputs, p / 100 is not.
    let rank = (request.percent() * len as f64 / 100.0).ceil() as usize;
    Some(rank.saturating_sub(1).min(len - 1))
}

/// Returns the nearest-rank percentile from a slice sorted ascending.
pub fn value_sorted<T: Copy>(sorted_values: &[T], request: PercentileRequest) -> Option<T> {
    let index = nearest_rank_index(sorted_values.len(), request)?;
    sorted_values.get(index).copied()
}
