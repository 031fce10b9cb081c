use crate::models::{CarrierMonth, PriceTable};
use crate::processors::{PriceAggregator, Statistic};
use serde::Serialize;

/// One aggregated report line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub key: CarrierMonth,
    pub value: f64,
}

/// Reduces a merged price table to one statistic per key, ordered strictly
/// ascending by value. Ties fall back to key order so repeated runs produce
/// identical output; callers should not read meaning into tie order.
pub struct ReportBuilder {
    aggregator: PriceAggregator,
}

impl ReportBuilder {
    pub fn new(statistic: Statistic) -> Self {
        Self {
            aggregator: PriceAggregator::new(statistic),
        }
    }

    pub fn build(&self, table: &PriceTable) -> Vec<ReportEntry> {
        let mut entries: Vec<ReportEntry> = table
            .iter()
            .map(|(key, series)| ReportEntry {
                key: key.clone(),
                value: self.aggregator.reduce(series),
            })
            .collect();

        entries.sort_by(|a, b| a.value.total_cmp(&b.value).then_with(|| a.key.cmp(&b.key)));
        entries
    }
}
