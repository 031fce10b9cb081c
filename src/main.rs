use clap::Parser;
use flightperf_processor::cli::{run, Cli};
use flightperf_processor::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
