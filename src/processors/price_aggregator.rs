use crate::error::{ProcessingError, Result};
use crate::utils::constants::{STAT_FAST_MEDIAN, STAT_MEAN, STAT_MEDIAN};
use std::fmt;

/// Reduction applied to each key's price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
    FastMedian,
}

impl Statistic {
    /// Parse a statistic name from the command line.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            STAT_MEAN => Ok(Statistic::Mean),
            STAT_MEDIAN => Ok(Statistic::Median),
            STAT_FAST_MEDIAN | "fast" => Ok(Statistic::FastMedian),
            other => Err(ProcessingError::Config(format!(
                "unknown statistic '{}' (expected {}, {} or {})",
                other, STAT_MEAN, STAT_MEDIAN, STAT_FAST_MEDIAN
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Mean => STAT_MEAN,
            Statistic::Median => STAT_MEDIAN,
            Statistic::FastMedian => STAT_FAST_MEDIAN,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reduces one price series to a single summary value.
pub struct PriceAggregator {
    statistic: Statistic,
}

impl PriceAggregator {
    pub fn new(statistic: Statistic) -> Self {
        Self { statistic }
    }

    pub fn reduce(&self, series: &[f64]) -> f64 {
        match self.statistic {
            Statistic::Mean => mean(series),
            Statistic::Median => median(series),
            Statistic::FastMedian => fast_median(series),
        }
    }
}

/// Arithmetic mean; 0.0 for an empty series.
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Sort-based median over a working copy; 0.0 for an empty series.
///
/// Even-length series average the two middle elements.
pub fn median(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[(n + 1) / 2 - 1]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Selection-based median: the k-th order statistic via QuickSelect, where
/// k is n/2 for even n and n/2 + 1 for odd n (1-based).
///
/// Agrees with [`median`] for every odd-length series. Even-length series
/// yield the lower-middle element rather than the averaged pair; callers
/// wanting the averaged definition use [`median`].
pub fn fast_median(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let n = series.len();
    let rank = if n % 2 == 0 { n / 2 } else { n / 2 + 1 };

    // Selection partitions in place, so work on a copy rather than
    // caller-owned data.
    let mut working = series.to_vec();
    select(&mut working, rank - 1)
}

/// Hoare-partition QuickSelect. Each pass partitions the working range
/// around its middle element, moving values >= pivot to the high side, then
/// narrows to the side holding `target` until the range collapses.
///
/// The low cursor may step one slot below the range after a pass, which is
/// why the indices are signed.
fn select(values: &mut [f64], target: usize) -> f64 {
    let target = target as isize;
    let mut start: isize = 0;
    let mut end: isize = values.len() as isize - 1;

    while start < end {
        let mut lower = start;
        let mut higher = end;
        let pivot = values[((lower + higher) / 2) as usize];

        while lower < higher {
            if values[lower as usize] >= pivot {
                values.swap(lower as usize, higher as usize);
                higher -= 1;
            } else {
                lower += 1;
            }
        }

        if values[lower as usize] > pivot {
            lower -= 1;
        }

        if target <= lower {
            end = lower;
        } else {
            start = lower + 1;
        }
    }

    values[target as usize]
}
