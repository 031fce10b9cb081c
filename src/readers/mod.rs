pub mod record_reader;

pub use record_reader::{discover_input_files, RecordReader};
