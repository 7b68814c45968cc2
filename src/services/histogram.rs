use crate::domain::simulation_results::HistogramEntry;

/// One bar handed to a chart renderer: its slot on the x axis, its height
/// and the text printed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub position: usize,
    pub frequency: usize,
    pub label: String,
}

/// Groups a slice sorted ascending into one entry per distinct value.
/// No bucketing: each distinct total gets its own entry.
pub fn build_histogram(sorted_values: &[u64]) -> Vec<HistogramEntry> {
    debug_assert!(sorted_values.is_sorted(), "histogram input must be sorted");
    sorted_values
        .chunk_by(|a, b| a == b)
        .map(|group| HistogramEntry {
            value: group[0],
            count: group.len(),
        })
        .collect()
}

pub fn chart_bars(entries: &[HistogramEntry]) -> Vec<ChartBar> {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| ChartBar {
            position,
            frequency: entry.count,
            label: entry.value.to_string(),
        })
        .collect()
}
