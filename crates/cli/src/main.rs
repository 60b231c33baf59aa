//! sbm - S3 Bucket Management
//!
//! An interactive terminal menu for basic S3 bucket administration.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sbm_cli::commands::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise keep SDK chatter out of the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.debug { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
