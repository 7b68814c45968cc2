use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::services::simulation_types::SimulationReport;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report file: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Yaml,
    Json,
}

impl ReportFormat {
    /// `.json` selects JSON; anything else is written as YAML.
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Yaml,
        }
    }
}

pub fn serialize_report(report: &SimulationReport, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn write_report_file(path: &str, report: &SimulationReport) -> Result<(), ReportError> {
    let contents = serialize_report(report, ReportFormat::from_path(path))?;
    std::fs::write(path, contents)?;
    info!(path, "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation_results::HistogramEntry;
    use crate::services::simulation_types::PercentileValue;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    fn build_report() -> SimulationReport {
        SimulationReport {
            data_source: "historic.csv".to_string(),
            generated_at: "2026-02-01 10:00:00".to_string(),
            simulations: 3,
            periods_per_round: 2,
            seed: Some(7),
            min: 4,
            max: 9,
            mean: 6.0,
            percentiles: vec![PercentileValue {
                percentile: 50.0,
                label: "50th Percentile".to_string(),
                value: 5,
            }],
            histogram: vec![
                HistogramEntry { value: 4, count: 1 },
                HistogramEntry { value: 5, count: 1 },
                HistogramEntry { value: 9, count: 1 },
            ],
        }
    }

    #[test]
    fn report_format_follows_extension() {
        assert_eq!(ReportFormat::from_path("out.json"), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path("out.JSON"), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path("out.yaml"), ReportFormat::Yaml);
        assert_eq!(ReportFormat::from_path("out"), ReportFormat::Yaml);
    }

    #[test]
    fn serialize_report_as_yaml() {
        let yaml = serialize_report(&build_report(), ReportFormat::Yaml).unwrap();
        assert!(yaml.contains("data_source: historic.csv"));
        assert!(yaml.contains("periods_per_round: 2"));
        assert!(yaml.contains("label: 50th Percentile"));
        assert!(yaml.contains("histogram:"));
    }

    #[test]
    fn serialize_report_as_json() {
        let json = serialize_report(&build_report(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["simulations"], 3);
        assert_eq!(value["seed"], 7);
        assert_eq!(value["percentiles"][0]["value"], 5);
        assert_eq!(value["histogram"][2]["value"], 9);
    }

    #[test]
    fn write_report_file_creates_file() {
        let file = assert_fs::NamedTempFile::new("report.yaml").unwrap();
        write_report_file(file.path().to_str().unwrap(), &build_report()).unwrap();
        file.assert(predicate::str::contains("mean: 6.0"));
    }
}
