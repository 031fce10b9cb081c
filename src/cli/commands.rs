use crate::analyzers::ReportBuilder;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{Concurrency, ParallelProcessor, Statistic};
use crate::utils::filename::generate_default_report_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Process {
            input_dir,
            output_file,
            statistic,
            parallel,
        } => {
            let statistic = Statistic::parse(&statistic)?;
            let concurrency = concurrency_for(parallel);
            let output_file = output_file
                .unwrap_or_else(|| generate_default_report_filename(statistic, concurrency));

            info!(
                input = %input_dir.display(),
                statistic = %statistic,
                mode = concurrency.mode_name(),
                "processing flight records"
            );

            let progress = ProgressReporter::new_spinner("Scanning flight records...", false);
            let processor = ParallelProcessor::new(concurrency);
            let summary = processor
                .process_directory(&input_dir, Some(progress))
                .await?;

            println!("Sane records:     {}", summary.counters.sane);
            println!("Rejected records: {}", summary.counters.rejected());
            if summary.files_failed > 0 {
                println!("Files skipped after I/O errors: {}", summary.files_failed);
            }

            let entries = ReportBuilder::new(statistic).build(&summary.table);
            ReportWriter::new().write_report(&entries, &output_file)?;

            println!(
                "Wrote {} carrier-month rows to {}",
                entries.len(),
                output_file.display()
            );
        }

        Commands::Validate {
            input_dir,
            parallel,
            json,
        } => {
            let concurrency = concurrency_for(parallel);

            info!(
                input = %input_dir.display(),
                mode = concurrency.mode_name(),
                "validating flight records"
            );

            let progress = ProgressReporter::new_spinner("Validating flight records...", false);
            let processor = ParallelProcessor::new(concurrency);
            let summary = processor
                .process_directory(&input_dir, Some(progress))
                .await?;

            println!("Sane records:    {}", summary.counters.sane);
            println!("Insane records:  {}", summary.counters.insane);
            println!("Corrupt records: {}", summary.counters.corrupt);
            if summary.files_failed > 0 {
                println!("Files skipped after I/O errors: {}", summary.files_failed);
            }

            if let Some(path) = json {
                ReportWriter::new().write_summary_json(&summary.counters, &path)?;
                println!("Wrote scan summary to {}", path.display());
            }
        }
    }

    Ok(())
}

fn concurrency_for(parallel: bool) -> Concurrency {
    if parallel {
        Concurrency::Parallel
    } else {
        Concurrency::Serial
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
