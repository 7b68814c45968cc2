use plotters::prelude::*;
use plotters::style::FontTransform;
use thiserror::Error;
use tracing::{debug, info};

use crate::services::histogram::ChartBar;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Render(String),
}

/// Consumes ordered (position, frequency, label) bars.
pub trait ChartRenderer {
    fn render(&mut self, bars: &[ChartBar]) -> Result<(), ChartError>;
}

pub const DEFAULT_CHART_SIZE: (u32, u32) = (3000, 2000);

pub struct PngBarChart {
    output_path: String,
    size: (u32, u32),
}

impl PngBarChart {
    pub fn new(output_path: impl Into<String>, size: (u32, u32)) -> Self {
        Self {
            output_path: output_path.into(),
            size,
        }
    }
}

impl ChartRenderer for PngBarChart {
    fn render(&mut self, bars: &[ChartBar]) -> Result<(), ChartError> {
        if bars.is_empty() {
            debug!("no bars to draw, skipping chart");
            return Ok(());
        }
        render_bar_chart_png(&self.output_path, self.size, bars)?;
        info!(path = %self.output_path, bars = bars.len(), "chart written");
        Ok(())
    }
}

fn render_bar_chart_png(
    output_path: &str,
    size: (u32, u32),
    bars: &[ChartBar],
) -> Result<(), ChartError> {
    let max_frequency = bars.iter().map(|bar| bar.frequency).max().unwrap_or(0);
    let max_x = bars.len() as i32;
    let max_y = max_frequency.saturating_add(1) as i32;

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .caption("Monte Carlo Simulation Results", ("sans-serif", 60))
        .x_label_area_size(140)
        .y_label_area_size(120)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let tick_style = ("sans-serif", 20)
        .into_font()
        .transform(FontTransform::Rotate90);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Total Delivered Items")
        .y_desc("Frequency")
        .label_style(("sans-serif", 20))
        .x_label_style(tick_style)
        .axis_desc_style(("sans-serif", 36))
        .x_labels(bars.len().min(150))
        .x_label_formatter(&|position| {
            if *position < 0 {
                return String::new();
            }
            bars.get(*position as usize)
                .map(|bar| bar.label.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(bars.iter().map(|bar| {
            let x = bar.position as i32;
            let mut rectangle = Rectangle::new([(x, 0), (x + 1, bar.frequency as i32)], bar_style);
            rectangle.set_margin(0, 0, 2, 2);
            rectangle
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}
