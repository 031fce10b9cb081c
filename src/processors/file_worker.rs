use crate::error::Result;
use crate::models::{CarrierMonth, FlightRecord, PriceTable, ScanCounters, ValidationOutcome};
use crate::processors::SanityChecker;
use crate::readers::RecordReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Results of scanning one file. Owned by the worker until handed to the
/// coordinator's merge.
#[derive(Debug, Default)]
pub struct FileScan {
    pub counters: ScanCounters,
    pub table: PriceTable,
}

/// Processes exactly one input file: streams decompressed CSV records,
/// validates each, and buckets average ticket prices by carrier and month.
///
/// Per-record failures are counted and absorbed here; only file-level I/O
/// and decode errors propagate to the coordinator.
pub struct FileWorker {
    path: PathBuf,
}

impl FileWorker {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn process(&self) -> Result<FileScan> {
        let checker = SanityChecker::new();
        let mut scan = FileScan::default();

        let mut reader = RecordReader::new().open(&self.path)?;
        for row in reader.records() {
            let row = row?;

            let record = match FlightRecord::from_csv(&row) {
                Some(record) => record,
                None => {
                    scan.counters.corrupt += 1;
                    continue;
                }
            };

            match checker.validate(&record) {
                ValidationOutcome::Valid => {
                    scan.counters.sane += 1;
                    self.collect_price(&record, &mut scan.table);
                }
                ValidationOutcome::Invalid(reason) => {
                    scan.counters.insane += 1;
                    debug!(file = %self.path.display(), reason, "record failed sanity check");
                }
                ValidationOutcome::Malformed(reason) => {
                    scan.counters.corrupt += 1;
                    debug!(file = %self.path.display(), reason, "record failed to parse");
                }
            }
        }

        Ok(scan)
    }

    /// Records without a ticket price stay sane but contribute nothing to
    /// the aggregation.
    fn collect_price(&self, record: &FlightRecord, table: &mut PriceTable) {
        if record.avg_ticket_price.is_empty() {
            return;
        }
        match record.avg_ticket_price.parse::<f64>() {
            Ok(price) => {
                table.push(CarrierMonth::new(&record.carrier, &record.month), price);
            }
            Err(_) => {
                debug!(file = %self.path.display(), "unparseable ticket price skipped");
            }
        }
    }
}
