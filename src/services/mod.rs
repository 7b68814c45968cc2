pub mod config;
pub mod histogram;
pub mod histogram_chart;
pub mod history_csv;
pub mod history_plot;
pub mod percentiles;
pub mod report_writer;
pub mod round_aggregator;
pub mod sampler;
pub mod simulation;
pub mod simulation_types;
