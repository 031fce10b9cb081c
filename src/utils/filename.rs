use crate::processors::{Concurrency, Statistic};
use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default report filename with format:
/// flight-prices-{statistic}-{mode}-{YYMMDD}.txt
pub fn generate_default_report_filename(
    statistic: Statistic,
    concurrency: Concurrency,
) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!(
        "flight-prices-{}-{}-{:02}{:02}{:02}.txt",
        statistic.name(),
        concurrency.mode_name(),
        year,
        month,
        day
    );
    PathBuf::from("output").join(filename)
}
