use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flightperf-processor")]
#[command(about = "Batch analytics over historical flight on-time performance archives")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate flight records and aggregate ticket prices into a report
    Process {
        #[arg(short, long, help = "Input directory of CSV / gzipped CSV files")]
        input_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Output report path [default: output/flight-prices-{statistic}-{mode}-{YYMMDD}.txt]"
        )]
        output_file: Option<PathBuf>,

        #[arg(
            short,
            long,
            default_value = "mean",
            help = "Statistic per carrier-month: mean, median or fast-median"
        )]
        statistic: String,

        #[arg(
            short,
            long,
            help = "Run one worker per logical CPU instead of a single worker"
        )]
        parallel: bool,
    },

    /// Validate flight records and report counters without writing a report
    Validate {
        #[arg(short, long, help = "Input directory of CSV / gzipped CSV files")]
        input_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Run one worker per logical CPU instead of a single worker"
        )]
        parallel: bool,

        #[arg(long, help = "Write the scan counters as JSON to this path")]
        json: Option<PathBuf>,
    },
}
