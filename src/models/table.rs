use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Aggregation key: one carrier code and one month, in their raw field form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CarrierMonth {
    pub carrier: String,
    pub month: String,
}

impl CarrierMonth {
    pub fn new(carrier: &str, month: &str) -> Self {
        Self {
            carrier: carrier.to_string(),
            month: month.to_string(),
        }
    }
}

impl fmt::Display for CarrierMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:0>2}", self.carrier, self.month)
    }
}

/// Observed average-ticket-price series keyed by carrier and month.
///
/// Each worker fills a private table for its own file; the coordinator merges
/// them afterwards. Merging concatenates series on key collision, so the
/// final series for a key is the multiset union of every worker's series
/// with no value dropped and none duplicated.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    series: HashMap<CarrierMonth, Vec<f64>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observed price to the key's series.
    pub fn push(&mut self, key: CarrierMonth, price: f64) {
        self.series.entry(key).or_default().push(price);
    }

    /// Fold another table into this one, concatenating on key collision.
    pub fn merge(&mut self, other: PriceTable) {
        for (key, mut values) in other.series {
            self.series.entry(key).or_default().append(&mut values);
        }
    }

    pub fn get(&self, key: &CarrierMonth) -> Option<&[f64]> {
        self.series.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CarrierMonth, &Vec<f64>)> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Record-level diagnostics for one scan. Summed at merge time; never gates
/// the correctness of the aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounters {
    /// Records that passed the sanity check
    pub sane: u64,
    /// Records that parsed but failed a consistency rule
    pub insane: u64,
    /// Records with an unparseable required field or wrong column count
    pub corrupt: u64,
}

impl ScanCounters {
    pub fn merge(&mut self, other: ScanCounters) {
        self.sane += other.sane;
        self.insane += other.insane;
        self.corrupt += other.corrupt;
    }

    pub fn rejected(&self) -> u64 {
        self.insane + self.corrupt
    }

    pub fn total(&self) -> u64 {
        self.sane + self.rejected()
    }
}
