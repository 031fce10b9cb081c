use crate::analyzers::ReportEntry;
use crate::error::Result;
use crate::models::ScanCounters;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the ordered report to a plain-text sink, one
/// `<CARRIER>-<MM> <value>` line per aggregation key, values rounded to two
/// decimals. Parent directories are created as needed.
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_report(&self, entries: &[ReportEntry], path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;

        let mut writer = BufWriter::new(File::create(path)?);
        for entry in entries {
            writeln!(writer, "{} {:.2}", entry.key, entry.value)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Serialize the run's diagnostics counters for downstream scripts.
    pub fn write_summary_json(&self, counters: &ScanCounters, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let json = serde_json::to_string_pretty(counters)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
