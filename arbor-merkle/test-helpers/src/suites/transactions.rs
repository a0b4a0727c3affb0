use std::path::PathBuf;

use arbor_merkle_test_helpers::{
    data::TestError,
    transactions,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 100_000;

#[derive(Parser, Debug)]
#[command(
    name = "gen-test-data",
    about = "Generate random transaction records, one per line"
)]
struct Args {
    /// Number of records; anything that is not a number falls back to 100000
    count: Option<String>,

    /// Directory the `transactions_<count>.txt` file is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<(), TestError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let count = match args.count.as_deref().map(str::parse::<usize>) {
        Some(Ok(count)) => count,
        Some(Err(err)) => {
            tracing::warn!(%err, default = DEFAULT_COUNT, "invalid record count");
            DEFAULT_COUNT
        }
        None => DEFAULT_COUNT,
    };

    tracing::info!(count, "generating random transaction records");
    let path = transactions::generate_file(&args.output_dir, count, &mut rand::thread_rng())?;
    tracing::info!(count, path = %path.display(), "transaction records written");
    Ok(())
}
