use plotters::prelude::*;
use thiserror::Error;

use crate::domain::throughput::ThroughputRecord;
use crate::services::history_csv::{HistoryError, load_records_from_file};

#[derive(Error, Debug)]
pub enum HistoryPlotError {
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("history file {0} contains no valid delivered-item counts")]
    EmptyHistory(String),
    #[error("failed to render history plot: {0}")]
    Plot(String),
}

/// Draws the per-period delivered items of a history file in file order.
pub fn plot_history_from_file(
    input_path: &str,
    delimiter: char,
    output_path: &str,
) -> Result<usize, HistoryPlotError> {
    let records = load_records_from_file(input_path, delimiter)?;
    if records.is_empty() {
        return Err(HistoryPlotError::EmptyHistory(input_path.to_string()));
    }
    render_plot_png(output_path, &records)?;
    Ok(records.len())
}

fn render_plot_png(output_path: &str, records: &[ThroughputRecord]) -> Result<(), HistoryPlotError> {
    let max_delivered = records
        .iter()
        .map(|record| record.delivered_items)
        .max()
        .unwrap_or(0);
    let max_y = max_delivered.saturating_add(1).max(1) as i64;
    let max_x = records.len().max(1) as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistoryPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Delivered Items Per Period", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| HistoryPlotError::Plot(e.to_string()))?;

    let label_count = records.len().clamp(1, 10);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Period")
        .y_desc("Delivered items")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            records
                .get(*index as usize)
                .map(|record| record.label.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| HistoryPlotError::Plot(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled().stroke_width(1);
    chart
        .draw_series(records.iter().enumerate().map(|(idx, record)| {
            Rectangle::new(
                [(idx as i32, 0), (idx as i32 + 1, i64::from(record.delivered_items))],
                bar_style,
            )
        }))
        .map_err(|e| HistoryPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| HistoryPlotError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn plot_history_from_file_writes_png() {
        let input_file = assert_fs::NamedTempFile::new("historic.csv").unwrap();
        input_file.write_str("2026-01-26,2\n2026-01-27,0\n2026-01-28,3\n").unwrap();
        let output_file = assert_fs::NamedTempFile::new("history.png").unwrap();

        let plotted = plot_history_from_file(
            input_file.path().to_str().unwrap(),
            ',',
            output_file.path().to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(plotted, 3);
        output_file.assert(predicate::path::exists());
        let metadata = std::fs::metadata(output_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn plot_history_from_file_rejects_empty_data() {
        let input_file = assert_fs::NamedTempFile::new("empty.csv").unwrap();
        input_file.write_str("date,delivered\n").unwrap();
        let output_file = assert_fs::NamedTempFile::new("empty.png").unwrap();

        let error = plot_history_from_file(
            input_file.path().to_str().unwrap(),
            ',',
            output_file.path().to_str().unwrap(),
        )
        .expect_err("expected empty history error");

        assert!(matches!(error, HistoryPlotError::EmptyHistory(_)));
    }
}
