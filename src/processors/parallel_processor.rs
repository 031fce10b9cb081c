use crate::error::{ProcessingError, Result};
use crate::models::{PriceTable, ScanCounters};
use crate::processors::file_worker::{FileScan, FileWorker};
use crate::readers::discover_input_files;
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Preset worker-pool sizes. `Serial` keeps scheduling deterministic for
/// tests and debugging; `Parallel` runs one worker per logical CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    Serial,
    Parallel,
}

impl Concurrency {
    pub fn worker_count(&self) -> usize {
        match self {
            Concurrency::Serial => 1,
            Concurrency::Parallel => num_cpus::get(),
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            Concurrency::Serial => "serial",
            Concurrency::Parallel => "parallel",
        }
    }
}

/// Merged results of one pipeline run.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub counters: ScanCounters,
    pub table: PriceTable,
    pub files_processed: usize,
    pub files_failed: usize,
}

/// Fans one [`FileWorker`] per input file out over a bounded worker pool and
/// merges the per-file results.
///
/// Workers own their tables and counters exclusively until completion, so
/// the merge runs single-threaded over handed-off values; completion order
/// never affects the merged contents.
pub struct ParallelProcessor {
    concurrency: Concurrency,
}

impl ParallelProcessor {
    pub fn new(concurrency: Concurrency) -> Self {
        Self { concurrency }
    }

    /// Scan every data file under `dir` and merge the per-file results.
    pub async fn process_directory(
        &self,
        dir: &Path,
        progress: Option<ProgressReporter>,
    ) -> Result<ScanSummary> {
        let files = discover_input_files(dir)?;
        let workers = self.concurrency.worker_count();
        info!(
            files = files.len(),
            workers,
            mode = self.concurrency.mode_name(),
            "starting flight record scan"
        );

        tokio::task::spawn_blocking(move || scan_files(files, workers, progress)).await?
    }

    /// Scan an explicit file list on the calling thread.
    pub fn process_files(&self, files: Vec<PathBuf>) -> Result<ScanSummary> {
        scan_files(files, self.concurrency.worker_count(), None)
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new(Concurrency::Parallel)
    }
}

fn scan_files(
    files: Vec<PathBuf>,
    workers: usize,
    progress: Option<ProgressReporter>,
) -> Result<ScanSummary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| ProcessingError::Config(e.to_string()))?;

    // A failed file contributes empty results rather than aborting its
    // siblings; partial data is preferred over a stalled batch.
    let scans: Vec<(bool, FileScan)> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let scan = match FileWorker::new(path).process() {
                    Ok(scan) => (true, scan),
                    Err(e) => {
                        warn!(file = %path.display(), error = %e, "worker failed, contributing empty results");
                        (false, FileScan::default())
                    }
                };
                if let Some(p) = &progress {
                    p.increment(1);
                }
                scan
            })
            .collect()
    });

    let mut summary = ScanSummary::default();
    for (succeeded, scan) in scans {
        if succeeded {
            summary.files_processed += 1;
        } else {
            summary.files_failed += 1;
        }
        summary.counters.merge(scan.counters);
        summary.table.merge(scan.table);
    }

    if let Some(p) = &progress {
        p.finish_with_message(&format!(
            "Scanned {} files ({} failed)",
            summary.files_processed, summary.files_failed
        ));
    }

    Ok(summary)
}
