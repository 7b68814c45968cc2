/// One row of the historical data source: a free-text label (usually a date)
/// and the number of items delivered in that period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThroughputRecord {
    pub label: String,
    pub delivered_items: u32,
}
