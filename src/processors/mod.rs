pub mod file_worker;
pub mod parallel_processor;
pub mod price_aggregator;
pub mod sanity_checker;

pub use file_worker::{FileScan, FileWorker};
pub use parallel_processor::{Concurrency, ParallelProcessor, ScanSummary};
pub use price_aggregator::{fast_median, mean, median, PriceAggregator, Statistic};
pub use sanity_checker::SanityChecker;
