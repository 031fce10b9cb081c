use crate::error::{ProcessingError, Result};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Streaming CSV reader over one input file, transparently decompressing
/// gzip archives.
pub struct RecordReader {
    has_headers: bool,
}

impl RecordReader {
    pub fn new() -> Self {
        Self { has_headers: true }
    }

    pub fn with_headers(has_headers: bool) -> Self {
        Self { has_headers }
    }

    /// Open a CSV reader for the file, gunzipping `.gz` inputs.
    ///
    /// The reader is flexible about row widths: short or long rows surface
    /// as records so callers can count them instead of aborting the file.
    pub fn open(&self, path: &Path) -> Result<csv::Reader<Box<dyn Read + Send>>> {
        let file = File::open(path)?;
        let buffered = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let source: Box<dyn Read + Send> = if is_gzip(path) {
            Box::new(MultiGzDecoder::new(buffered))
        } else {
            Box::new(buffered)
        };

        Ok(csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(source))
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}

/// Discover data files (`.csv` and `.csv.gz`) in the input directory, sorted
/// for deterministic submission order.
///
/// A missing directory or one containing zero data files is the single fatal
/// input condition of the pipeline.
pub fn discover_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ProcessingError::InsufficientInput(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") | Some("gz") => files.push(path),
            _ => {}
        }
    }

    if files.is_empty() {
        return Err(ProcessingError::InsufficientInput(dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_reads_plain_csv() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n")?;

        let mut reader = RecordReader::new().open(&path)?;
        let rows: Vec<_> = reader.records().collect::<std::result::Result<_, _>>()?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(1), Some("2"));
        Ok(())
    }

    #[test]
    fn test_open_reads_gzip_csv() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("data.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        encoder.write_all(b"a,b,c\n1,2,3\n4,5,6\n")?;
        encoder.finish()?;

        let mut reader = RecordReader::new().open(&path)?;
        let rows: Vec<_> = reader.records().collect::<std::result::Result<_, _>>()?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get(2), Some("6"));
        Ok(())
    }

    #[test]
    fn test_flexible_rows_surface_as_records() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b,c\n1,2\n1,2,3,4\n")?;

        let mut reader = RecordReader::new().open(&path)?;
        let rows: Vec<_> = reader.records().collect::<std::result::Result<_, _>>()?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 4);
        Ok(())
    }

    #[test]
    fn test_discover_finds_only_data_files() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("b.csv"), "x")?;
        std::fs::write(dir.path().join("a.csv.gz"), "x")?;
        std::fs::write(dir.path().join("notes.txt"), "x")?;

        let files = discover_input_files(dir.path())?;
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.csv.gz", "b.csv"]);
        Ok(())
    }

    #[test]
    fn test_discover_empty_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = discover_input_files(dir.path());
        assert!(matches!(
            result,
            Err(ProcessingError::InsufficientInput(_))
        ));
    }

    #[test]
    fn test_discover_missing_directory_is_fatal() {
        let result = discover_input_files(Path::new("/nonexistent/flight-data"));
        assert!(matches!(
            result,
            Err(ProcessingError::InsufficientInput(_))
        ));
    }
}
