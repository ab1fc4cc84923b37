use clap::Parser;
use tracing::info;

use cyclokit::cli::{self, Args};
use cyclokit::{init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging()?;
    info!("CycloKit {} (built {})", VERSION, BUILD_DATE);

    cli::run(&args)
}
