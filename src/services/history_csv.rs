use std::fs::File;
use std::io::{BufRead, BufReader};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::historical_pool::HistoricalPool;
use crate::domain::throughput::ThroughputRecord;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("failed to read history file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("history file {0} contains no valid delivered-item counts")]
    EmptyPool(String),
}

pub const DEFAULT_DELIMITER: char = ',';

/// Parses one `label<delimiter>count` line. Returns `None` for anything that
/// has no second field or whose second field is not a non-negative integer.
pub fn parse_record(line: &str, delimiter: char) -> Option<ThroughputRecord> {
    let mut fields = line.split(delimiter);
    let label = fields.next()?.trim();
    let delivered_items = fields.next()?.trim().parse::<u32>().ok()?;
    Some(ThroughputRecord {
        label: label.to_string(),
        delivered_items,
    })
}

/// Collects every valid record from `reader`. Malformed lines are skipped.
pub fn parse_history<R: BufRead>(
    reader: R,
    delimiter: char,
) -> Result<Vec<ThroughputRecord>, std::io::Error> {
    let mut records = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                debug!(line = line_number + 1, "skipped record that is not valid UTF-8");
                continue;
            }
            Err(e) => return Err(e),
        };
        match parse_record(&line, delimiter) {
            Some(record) => {
                debug!(line = line_number + 1, value = record.delivered_items, "loaded");
                records.push(record);
            }
            None => debug!(line = line_number + 1, content = %line, "skipped malformed record"),
        }
    }
    Ok(records)
}

pub fn load_records_from_file(
    path: &str,
    delimiter: char,
) -> Result<Vec<ThroughputRecord>, HistoryError> {
    let read_error = |source| HistoryError::Read {
        path: path.to_string(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    parse_history(BufReader::new(file), delimiter).map_err(read_error)
}

pub fn load_pool_from_file(path: &str, delimiter: char) -> Result<HistoricalPool, HistoryError> {
    let records = load_records_from_file(path, delimiter)?;
    let pool = HistoricalPool::from_records(&records)
        .map_err(|_| HistoryError::EmptyPool(path.to_string()))?;
    info!(path, values = pool.len(), min = pool.min(), max = pool.max(), "historical pool loaded");
    Ok(pool)
}
